//! Paging a metrics date range one calendar unit at a time

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::calendar::{
    add_quarters, add_weeks, add_years, end_of_day, end_of_quarter, end_of_week, end_of_year,
    start_of_quarter, start_of_week, start_of_year,
};
use crate::error::WindowError;

/// Direction of a page step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Forward,
    Backward,
}

/// Reporting frequency of the metrics table; decides how far one page reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    /// Pages by week
    Daily,
    /// Pages by quarter
    Weekly,
    /// Pages by year
    Monthly,
    /// Pages by three years
    Quarterly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Quarterly => "QUARTERLY",
        };
        f.write_str(name)
    }
}

impl FromStr for Frequency {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "QUARTERLY" => Ok(Frequency::Quarterly),
            _ => Err(WindowError::UnknownFrequency(s.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FORWARD" => Ok(Direction::Forward),
            "BACKWARD" => Ok(Direction::Backward),
            _ => Err(WindowError::UnknownDirection(s.to_string())),
        }
    }
}

/// Inclusive `[start_date, end_date]` range in epoch seconds, UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeWindow {
    pub start_date: i64,
    pub end_date: i64,
}

impl DateRangeWindow {
    /// Build a window, rejecting a start after the end
    pub fn new(start_date: i64, end_date: i64) -> Result<Self, WindowError> {
        let window = Self { start_date, end_date };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        if self.start_date > self.end_date {
            return Err(WindowError::InvertedWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

/// The aligned window of `frequency` that contains `ts`.
///
/// Quarterly windows cover the year of `ts` and the two years before it.
pub fn window_containing(frequency: Frequency, ts: i64) -> Result<DateRangeWindow, WindowError> {
    let (start_date, end_date) = match frequency {
        Frequency::Daily => (start_of_week(ts)?, end_of_day(end_of_week(ts)?)?),
        Frequency::Weekly => (start_of_quarter(ts)?, end_of_quarter(ts)?),
        Frequency::Monthly => (start_of_year(ts)?, end_of_year(ts)?),
        Frequency::Quarterly => (start_of_year(add_years(ts, -2)?)?, end_of_year(ts)?),
    };
    DateRangeWindow::new(start_date, end_date)
}

/// Compute the window one page away from `current`.
///
/// With `expand` the bound opposite to the direction of travel stays put and
/// the range grows; otherwise both bounds move.
pub fn next_window(
    direction: Direction,
    frequency: Frequency,
    current: DateRangeWindow,
    expand: bool,
) -> Result<DateRangeWindow, WindowError> {
    current.validate()?;

    let (updated_start, updated_end) = match (frequency, direction) {
        (Frequency::Weekly, Direction::Forward) => {
            let anchor = add_quarters(current.end_date, 1)?;
            (start_of_quarter(anchor)?, end_of_quarter(anchor)?)
        }
        (Frequency::Weekly, Direction::Backward) => {
            let anchor = add_quarters(current.start_date, -1)?;
            (start_of_quarter(anchor)?, end_of_quarter(anchor)?)
        }
        (Frequency::Monthly, Direction::Forward) => {
            let anchor = add_years(current.end_date, 1)?;
            (start_of_year(anchor)?, end_of_year(anchor)?)
        }
        (Frequency::Monthly, Direction::Backward) => {
            let anchor = add_years(current.start_date, -1)?;
            (start_of_year(anchor)?, end_of_year(anchor)?)
        }
        // The displayed span is three years wide, so each bound moves on its own.
        (Frequency::Quarterly, Direction::Forward) => (
            start_of_year(add_years(current.start_date, 3)?)?,
            end_of_year(add_years(current.end_date, 3)?)?,
        ),
        (Frequency::Quarterly, Direction::Backward) => (
            start_of_year(add_years(current.start_date, -3)?)?,
            end_of_year(add_years(current.end_date, -3)?)?,
        ),
        (Frequency::Daily, Direction::Forward) => {
            let anchor = add_weeks(current.end_date, 1)?;
            (start_of_week(anchor)?, end_of_day(end_of_week(anchor)?)?)
        }
        (Frequency::Daily, Direction::Backward) => {
            let anchor = add_weeks(current.start_date, -1)?;
            (start_of_week(anchor)?, end_of_day(end_of_week(anchor)?)?)
        }
    };

    let (start_date, end_date) = match (direction, expand) {
        (Direction::Forward, true) => (current.start_date, updated_end),
        (Direction::Backward, true) => (updated_start, current.end_date),
        (_, false) => (updated_start, updated_end),
    };

    DateRangeWindow::new(start_date, end_date)
}

/// Step the window and hand the result to `on_window_computed`.
///
/// The caller owns the current window; nothing is written on error.
pub fn step_date_range_window<F>(
    direction: Direction,
    frequency: Frequency,
    current: DateRangeWindow,
    expand: bool,
    on_window_computed: F,
) -> Result<(), WindowError>
where
    F: FnOnce(DateRangeWindow),
{
    let window = next_window(direction, frequency, current, expand)?;
    on_window_computed(window);
    Ok(())
}
