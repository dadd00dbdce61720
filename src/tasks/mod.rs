//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod timer_ticker;

// Re-export main functions
pub use timer_ticker::timer_ticker_task;
