//! API request and response structures

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::TrackerError,
    state::{SessionSummary, TrackingStatus},
};

/// JSON body extractor whose rejections are reported as [`TrackerError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(TrackerError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for TrackerError {
    fn from(rejection: JsonRejection) -> Self {
        TrackerError::InvalidRequest(rejection.body_text())
    }
}

/// Body of POST /set_task_name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTaskNameRequest {
    pub task: String,
}

/// API response structure for state change endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TrackingStatus,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, state: TrackingStatus) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            state,
        }
    }

    /// Create a response for a request that left a session open
    pub fn tracking(message: String, state: TrackingStatus) -> Self {
        Self::new("tracking".to_string(), message, state)
    }

    /// Create a response for a request that left no session open
    pub fn idle(message: String, state: TrackingStatus) -> Self {
        Self::new("idle".to_string(), message, state)
    }

    /// Pick `tracking` or `idle` from the state itself
    pub fn from_state(message: String, state: TrackingStatus) -> Self {
        if state.tracking {
            Self::tracking(message, state)
        } else {
            Self::idle(message, state)
        }
    }
}

/// Response of POST /stop_tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopResponse {
    pub status: String,
    pub message: String,
    pub session: SessionSummary,
}

/// Response of POST /events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub status: String,
    pub event_count: usize,
}

/// Error body returned for any failed operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
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

impl TrackerError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::EmptyTaskName => StatusCode::BAD_REQUEST,
            TrackerError::NoTaskName
            | TrackerError::AlreadyTracking { .. }
            | TrackerError::NotTracking => StatusCode::CONFLICT,
            TrackerError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TrackerError::Backend(_) => StatusCode::SERVICE_UNAVAILABLE,
            TrackerError::StateLock(_) | TrackerError::SessionLog(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
            timestamp: Utc::now(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn every_error_has_a_status_code() {
        let cases = [
            (TrackerError::EmptyTaskName, StatusCode::BAD_REQUEST),
            (TrackerError::NoTaskName, StatusCode::CONFLICT),
            (TrackerError::AlreadyTracking { task: "Review".to_string() }, StatusCode::CONFLICT),
            (TrackerError::NotTracking, StatusCode::CONFLICT),
            (TrackerError::InvalidRequest("missing field".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (TrackerError::Backend("unreachable".to_string()), StatusCode::SERVICE_UNAVAILABLE),
            (TrackerError::StateLock("tracker state".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (TrackerError::SessionLog("disk full".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{:?}", error);
        }
    }

    #[tokio::test]
    async fn error_responses_carry_json_body() {
        let error = TrackerError::SessionLog("disk full".to_string());
        let message = error.to_string();

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, message);
    }
}
