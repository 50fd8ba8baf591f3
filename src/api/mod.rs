//! HTTP API module
//!
//! This module exposes the tracker operations over HTTP for shells that do
//! not run in-process.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/set_task_name", post(set_task_name_handler))
        .route("/start_tracking", post(start_tracking_handler))
        .route("/stop_tracking", post(stop_tracking_handler))
        .route("/events", post(event_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
