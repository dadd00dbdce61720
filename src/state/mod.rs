//! State management module
//!
//! The meeting runtime that owns page timer bookkeeping, the metrics window,
//! and the shared application state wrapping both.

pub mod app_state;
pub mod meeting_state;
pub mod metrics_window;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use meeting_state::{AgendaPage, AgendaPageInput, MeetingState, PageSummary};
pub use metrics_window::MetricsWindow;
pub use timer_state::TimerSnapshot;
