//! Timer snapshot published on every tick

use serde::{Deserialize, Serialize};

use crate::timers::{format_display_timer, DisplayTimer, TimerComputationResult};

use super::MeetingState;

/// Timers of the active page as of `computed_at_ms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub page_id: Option<String>,
    pub is_paused: bool,
    pub timers: Option<TimerComputationResult>,
    pub display: DisplayTimer,
    pub computed_at_ms: i64,
}

impl TimerSnapshot {
    /// Snapshot before anything was computed
    pub fn idle() -> Self {
        Self {
            page_id: None,
            is_paused: false,
            timers: None,
            display: format_display_timer(None),
            computed_at_ms: 0,
        }
    }

    /// Compute the active page's timers at `now_ms`
    pub fn compute(meeting: &MeetingState, now_ms: i64) -> Self {
        let timers = meeting.current_timers(now_ms);
        Self {
            page_id: meeting.current_page_id.clone(),
            is_paused: meeting.is_paused,
            display: format_display_timer(timers.as_ref()),
            timers,
            computed_at_ms: now_ms,
        }
    }

    pub fn is_overtime(&self) -> bool {
        self.timers.as_ref().is_some_and(|t| t.is_overtime)
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}
