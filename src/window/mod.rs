//! Rolling date-range window calculator for metric score history

pub mod calendar;
pub mod stepper;

// Re-export main types
pub use stepper::{
    next_window, step_date_range_window, window_containing, DateRangeWindow, Direction, Frequency,
};
