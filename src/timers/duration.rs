//! Normalization of the expected page duration
//!
//! The agenda data layer hands over a page's budget either as a number or as a
//! numeric string. It is parsed exactly once, when the page snapshot is built,
//! so the timer engine itself only ever sees whole seconds.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::MalformedDurationError;

/// Expected duration as it arrives from the agenda data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Seconds(f64),
    Text(String),
}

impl RawDuration {
    /// Parse into whole, non-negative seconds (fractions are floored)
    pub fn parse(&self) -> Result<i64, MalformedDurationError> {
        let value = match self {
            RawDuration::Seconds(value) => *value,
            RawDuration::Text(text) => text.trim().parse::<f64>().map_err(|_| self.malformed())?,
        };

        if !value.is_finite() || value < 0.0 || value > i64::MAX as f64 {
            return Err(self.malformed());
        }

        Ok(value.floor() as i64)
    }

    fn malformed(&self) -> MalformedDurationError {
        let raw = match self {
            RawDuration::Seconds(value) => value.to_string(),
            RawDuration::Text(text) => text.clone(),
        };
        MalformedDurationError { raw }
    }
}

impl From<i64> for RawDuration {
    fn from(seconds: i64) -> Self {
        RawDuration::Seconds(seconds as f64)
    }
}

impl From<&str> for RawDuration {
    fn from(text: &str) -> Self {
        RawDuration::Text(text.to_string())
    }
}

/// Resolve a page budget, recovering from bad input by dropping the budget.
///
/// `None` means the page has no meaningful duration budget.
pub fn normalize_expected_duration(page_id: &str, raw: Option<&RawDuration>) -> Option<i64> {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            warn!("Agenda page {} has no expected duration", page_id);
            return None;
        }
    };

    match raw.parse() {
        Ok(seconds) => Some(seconds),
        Err(e) => {
            warn!("Agenda page {}: {}, timing without a budget", page_id, e);
            None
        }
    }
}
