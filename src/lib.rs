//! Agenda Clock - meeting page timers and rolling metric date windows
//!
//! The core is two pure calculators: the page timer engine (elapsed,
//! remaining and overtime seconds with pause semantics, plus the countdown
//! string) and the rolling date-range window stepper used to page metric
//! history. A small HTTP service hosts the meeting runtime around them.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod timers;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::{MalformedDurationError, MeetingError, WindowError};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
