//! Elapsed, remaining and overtime figures for the active agenda page

use serde::{Deserialize, Serialize};

/// Timer bookkeeping of one agenda page.
///
/// Timestamps are epoch milliseconds. The meeting runtime is the only writer;
/// the engine reads a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTimerState {
    /// When the page timer was last (re)started, 0 while unset
    pub time_last_started: i64,
    /// When the meeting was last paused while on this page
    pub time_last_paused: Option<i64>,
    /// Seconds carried over from earlier visits to this page
    pub time_previously_spent_s: Option<i64>,
    /// Seconds the meeting spent paused on this page during the current visit
    pub time_spent_paused_s: i64,
    /// Budget for the page in seconds; `None` when the budget was missing or malformed
    pub expected_duration_s: Option<i64>,
}

impl PageTimerState {
    /// A page that has never been started
    pub fn new(expected_duration_s: Option<i64>) -> Self {
        Self {
            expected_duration_s,
            ..Self::default()
        }
    }

    /// Whether the page timer has been started at least once
    pub fn is_started(&self) -> bool {
        self.time_last_started > 0
    }
}

/// Derived figures, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerComputationResult {
    pub is_overtime: bool,
    pub elapsed_s: i64,
    pub remaining_s: i64,
    /// Share of the budget still left, in `[0, 100]`
    pub remaining_percentage_of_expected_time: f64,
    pub overtime_s: i64,
}

/// Seconds actively spent on the page, paused intervals excluded.
///
/// While the meeting is paused the clock stops at `time_last_paused`, or at
/// `now_ms` when the pause stamp is missing. Never negative.
pub fn elapsed_seconds(state: &PageTimerState, is_paused: bool, now_ms: i64) -> i64 {
    if !state.is_started() {
        return 0;
    }

    let until = if is_paused {
        state.time_last_paused.unwrap_or(now_ms)
    } else {
        now_ms
    };

    let carried_s = state
        .time_previously_spent_s
        .unwrap_or(0)
        .saturating_sub(state.time_spent_paused_s);
    let active_ms = until
        .saturating_sub(state.time_last_started)
        .saturating_add(carried_s.saturating_mul(1000));

    active_ms.div_euclid(1000).max(0)
}

/// Compute the timers of the current page, `None` when no page is active
pub fn compute_current_page_timers(
    state: Option<&PageTimerState>,
    is_paused: bool,
    now_ms: i64,
) -> Option<TimerComputationResult> {
    let state = state?;
    let elapsed = elapsed_seconds(state, is_paused, now_ms);

    let result = match state.expected_duration_s {
        Some(expected) => {
            let used = percentage_used(elapsed, expected);
            TimerComputationResult {
                is_overtime: elapsed > expected,
                elapsed_s: elapsed,
                remaining_s: expected - elapsed,
                remaining_percentage_of_expected_time: 100.0 - used,
                overtime_s: elapsed - expected,
            }
        }
        // No budget: nothing is ever over time and there is nothing left to count down.
        None => TimerComputationResult {
            is_overtime: false,
            elapsed_s: elapsed,
            remaining_s: 0,
            remaining_percentage_of_expected_time: 0.0,
            overtime_s: 0,
        },
    };

    Some(result)
}

fn percentage_used(elapsed: i64, expected: i64) -> f64 {
    if expected <= 0 {
        return if elapsed > 0 { 100.0 } else { 0.0 };
    }
    (100.0 * elapsed as f64 / expected as f64).clamp(0.0, 100.0)
}
