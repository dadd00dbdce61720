//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::{MeetingError, WindowError},
    state::AppState,
    window::DateRangeWindow,
};
use super::responses::{
    AgendaRequest, ApiResponse, HealthResponse, ResetWindowRequest, StatusResponse,
    StepWindowRequest, SummaryResponse, TimerResponse, WindowResponse,
};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse>);

fn status_for(e: &MeetingError) -> StatusCode {
    match e {
        MeetingError::UnknownPage(_) => StatusCode::NOT_FOUND,
        MeetingError::DuplicatePage(_) | MeetingError::InvalidTimestamp(_) => StatusCode::BAD_REQUEST,
        MeetingError::AlreadyPaused | MeetingError::NotPaused => StatusCode::CONFLICT,
        MeetingError::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MeetingError::Window(_) => StatusCode::BAD_REQUEST,
    }
}

fn api_error(e: MeetingError) -> ApiError {
    let status = status_for(&e);
    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Request rejected: {}", e);
    }
    (status, Json(ApiResponse::error(e.to_string())))
}

/// Handle PUT /agenda - Replace the meeting agenda
pub async fn agenda_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgendaRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let meeting = state.set_agenda(request.pages).map_err(api_error)?;
    info!("Agenda endpoint called - {} pages", meeting.pages.len());
    Ok(Json(ApiResponse::ok(
        format!("Agenda set with {} pages", meeting.pages.len()),
        &meeting,
    )))
}

/// Handle POST /pages/:page_id/start - Move the meeting to a page
pub async fn start_page_handler(
    State(state): State<Arc<AppState>>,
    Path(page_id): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let meeting = state.start_page(&page_id).map_err(api_error)?;
    Ok(Json(ApiResponse::ok(format!("Page {} started", page_id), &meeting)))
}

/// Handle POST /pause - Pause the meeting
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let meeting = state.pause().map_err(api_error)?;
    Ok(Json(ApiResponse::ok("Meeting paused".to_string(), &meeting)))
}

/// Handle POST /resume - Resume the meeting
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, ApiError> {
    let meeting = state.resume().map_err(api_error)?;
    Ok(Json(ApiResponse::ok("Meeting resumed".to_string(), &meeting)))
}

/// Handle GET /timer - Timers of the active page as of now
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerResponse>, ApiError> {
    let snapshot = state.compute_timer_snapshot().map_err(api_error)?;
    Ok(Json(snapshot))
}

/// Handle GET /summary - Time spent per page
pub async fn summary_handler(State(state): State<Arc<AppState>>) -> Result<Json<SummaryResponse>, ApiError> {
    let pages = state.summary().map_err(api_error)?;
    let total_spent_s = pages.iter().map(|page| page.spent_s).sum();
    Ok(Json(SummaryResponse { pages, total_spent_s }))
}

/// Handle GET /window - Current metrics window
pub async fn window_handler(State(state): State<Arc<AppState>>) -> Result<Json<WindowResponse>, ApiError> {
    let window = state.get_metrics_window().map_err(api_error)?;
    Ok(Json(window))
}

/// Handle PUT /window - Replace the metrics window
pub async fn reset_window_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResetWindowRequest>,
) -> Result<Json<WindowResponse>, ApiError> {
    let range = DateRangeWindow::new(request.start_date, request.end_date)
        .map_err(|e: WindowError| api_error(e.into()))?;
    let window = state
        .reset_metrics_window(request.frequency, range)
        .map_err(api_error)?;
    Ok(Json(window))
}

/// Handle POST /window/step - Page the metrics window
pub async fn step_window_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StepWindowRequest>,
) -> Result<Json<WindowResponse>, ApiError> {
    let window = state
        .step_metrics_window(request.direction, request.expand)
        .map_err(api_error)?;
    Ok(Json(window))
}

/// Handle GET /status - Return current meeting status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let meeting = state.get_meeting().map_err(api_error)?;
    let metrics_window = state.get_metrics_window().map_err(api_error)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        meeting: (&meeting).into(),
        last_tick: state.last_timer_snapshot(),
        metrics_window,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
