//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{AgendaPageInput, MeetingState, MetricsWindow, PageSummary, TimerSnapshot},
    window::{Direction, Frequency},
};

/// Compact view of the meeting attached to every state change response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingStatus {
    pub current_page_id: Option<String>,
    pub is_paused: bool,
    pub page_count: usize,
}

impl From<&MeetingState> for MeetingStatus {
    fn from(meeting: &MeetingState) -> Self {
        Self {
            current_page_id: meeting.current_page_id.clone(),
            is_paused: meeting.is_paused,
            page_count: meeting.pages.len(),
        }
    }
}

/// API response structure for state change endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub meeting: Option<MeetingStatus>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String, meeting: Option<MeetingStatus>) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            meeting,
        }
    }

    /// Create a success response
    pub fn ok(message: String, meeting: &MeetingState) -> Self {
        Self::new("ok", message, Some(meeting.into()))
    }

    /// Create an error response
    pub fn error(message: String) -> Self {
        Self::new("error", message, None)
    }
}

/// Body of PUT /agenda
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaRequest {
    pub pages: Vec<AgendaPageInput>,
}

/// Body of POST /window/step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepWindowRequest {
    pub direction: Direction,
    #[serde(default)]
    pub expand: bool,
}

/// Body of PUT /window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetWindowRequest {
    pub frequency: Frequency,
    pub start_date: i64,
    pub end_date: i64,
}

/// Response of GET /timer
pub type TimerResponse = TimerSnapshot;

/// Response of GET /summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub pages: Vec<PageSummary>,
    pub total_spent_s: i64,
}

/// Response of the window endpoints
pub type WindowResponse = MetricsWindow;

/// Status response with meeting and ticker information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub meeting: MeetingStatus,
    pub last_tick: TimerSnapshot,
    pub metrics_window: MetricsWindow,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
