//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/agenda", put(agenda_handler))
        .route("/pages/:page_id/start", post(start_page_handler))
        .route("/pause", post(pause_handler))
        .route("/resume", post(resume_handler))
        .route("/timer", get(timer_handler))
        .route("/summary", get(summary_handler))
        .route("/window", get(window_handler).put(reset_window_handler))
        .route("/window/step", post(step_window_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
