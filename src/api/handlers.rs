//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::{error, info, warn};

use crate::{
    error::TrackerError,
    state::{AppState, InputEvent, TrackingStatus},
};
use super::responses::{
    ApiJson, ApiResponse, EventResponse, HealthResponse, SetTaskNameRequest, StopResponse,
};

/// Handle POST /set_task_name - Record the task name for the next session
pub async fn set_task_name_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SetTaskNameRequest>,
) -> Result<Json<ApiResponse>, TrackerError> {
    if let Err(e) = state.set_task_name(&request.task) {
        warn!("set_task_name rejected: {}", e);
        return Err(e);
    }

    let status = state.status()?;
    info!("set_task_name endpoint called - task recorded");
    Ok(Json(ApiResponse::from_state(
        format!("Task name set to '{}'", request.task),
        status,
    )))
}

/// Handle POST /start_tracking - Open a session for the recorded task
pub async fn start_tracking_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, TrackerError> {
    match state.start_tracking() {
        Ok(status) => {
            let task = status.task.clone().unwrap_or_default();
            info!("start_tracking endpoint called - session opened");
            Ok(Json(ApiResponse::tracking(
                format!("{} is being tracked...", task),
                status,
            )))
        }
        Err(e) => {
            warn!("start_tracking failed: {}", e);
            Err(e)
        }
    }
}

/// Handle POST /stop_tracking - Close the open session
pub async fn stop_tracking_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StopResponse>, TrackerError> {
    match state.stop_tracking().await {
        Ok(session) => {
            info!("stop_tracking endpoint called - session {} closed", session.id);
            Ok(Json(StopResponse {
                status: "idle".to_string(),
                message: format!("Stopped tracking '{}'", session.task),
                session,
            }))
        }
        Err(e) => {
            warn!("stop_tracking failed: {}", e);
            Err(e)
        }
    }
}

/// Handle POST /events - Record an input event into the open session
pub async fn event_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(event): ApiJson<InputEvent>,
) -> Result<Json<EventResponse>, TrackerError> {
    let event_count = state.record_event(event)?;
    Ok(Json(EventResponse {
        status: "recorded".to_string(),
        event_count,
    }))
}

/// Handle GET /status - Return current tracker status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TrackingStatus>, TrackerError> {
    state.status().map(Json).map_err(|e| {
        error!("Failed to get tracker status: {}", e);
        e
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
