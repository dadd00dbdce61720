//! Meeting page timer engine
//!
//! Pure functions turning a page's pause/resume bookkeeping plus an explicit
//! "now" into elapsed/remaining/overtime figures and a display string.

pub mod display;
pub mod duration;
pub mod page_timer;

// Re-export main types
pub use display::{format_display_timer, DisplayTimer};
pub use duration::{normalize_expected_duration, RawDuration};
pub use page_timer::{
    compute_current_page_timers, elapsed_seconds, PageTimerState, TimerComputationResult,
};
