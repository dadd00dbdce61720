//! The metrics table's current date range

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::WindowError,
    window::{step_date_range_window, window_containing, DateRangeWindow, Direction, Frequency},
};

/// Caller-owned rolling window together with the frequency that pages it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsWindow {
    pub frequency: Frequency,
    pub window: DateRangeWindow,
}

impl MetricsWindow {
    /// Window of `frequency` containing `now_s`
    pub fn current(frequency: Frequency, now_s: i64) -> Result<Self, WindowError> {
        Ok(Self {
            frequency,
            window: window_containing(frequency, now_s)?,
        })
    }

    /// Replace frequency and range
    pub fn reset(&mut self, frequency: Frequency, window: DateRangeWindow) -> Result<(), WindowError> {
        window.validate()?;
        self.frequency = frequency;
        self.window = window;
        info!(
            "Metrics window reset to {} [{}, {}]",
            frequency, window.start_date, window.end_date
        );
        Ok(())
    }

    /// Page the window and store the result
    pub fn step(&mut self, direction: Direction, expand: bool) -> Result<DateRangeWindow, WindowError> {
        let current = self.window;
        let frequency = self.frequency;
        step_date_range_window(direction, frequency, current, expand, |next| {
            self.window = next;
        })?;
        info!(
            "Metrics window stepped {:?} (expand={}) to [{}, {}]",
            direction, expand, self.window.start_date, self.window.end_date
        );
        Ok(self.window)
    }
}
