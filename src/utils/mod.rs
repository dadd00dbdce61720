//! Utility functions module
//!
//! Time source and process signal helpers used by the service.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::shutdown_signal;
