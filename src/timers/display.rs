//! Countdown / overtime strings for the active page

use serde::{Deserialize, Serialize};

use super::page_timer::TimerComputationResult;

/// Presentation form of a [`TimerComputationResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTimer {
    /// `MM:SS` or `HH:MM:SS`, prefixed with `-` while over time
    pub time: String,
    /// Whole minutes shown exceed 90, which switches to the hour format
    pub more_than_90: bool,
    pub elapsed_min: i64,
}

/// Format the timers of the current page. Never fails: missing input counts as zero.
pub fn format_display_timer(result: Option<&TimerComputationResult>) -> DisplayTimer {
    let (is_overtime, overtime_s, remaining_s, elapsed_s) = match result {
        Some(r) => (r.is_overtime, r.overtime_s, r.remaining_s, r.elapsed_s),
        None => (false, 0, 0, 0),
    };

    let duration_s = if is_overtime { overtime_s } else { remaining_s };
    let duration_m = duration_s.div_euclid(60);
    let duration_h = duration_m.div_euclid(60);
    let seconds = duration_s.rem_euclid(60);
    let prefix = if is_overtime { "-" } else { "" };
    let magnitude_m = duration_m.abs();

    let formatted = if magnitude_m == 60 {
        // Exactly an hour stays "60:00" instead of rolling over to "01:00:00".
        format!("{:02}:{:02}", magnitude_m, seconds)
    } else if magnitude_m > 90 {
        format!(
            "{:02}:{:02}:{:02}",
            duration_h.abs(),
            duration_m.rem_euclid(60),
            seconds
        )
    } else {
        format!("{:02}:{:02}", magnitude_m, seconds)
    };

    DisplayTimer {
        time: format!("{}{}", prefix, formatted),
        more_than_90: magnitude_m > 90,
        elapsed_min: if elapsed_s < 60 { 0 } else { elapsed_s / 60 },
    }
}
