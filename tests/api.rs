use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use track_event::{create_router, AppState};

fn app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), None));
    (create_router(Arc::clone(&state)), state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn full_session_over_http() {
    let (app, _state) = app();

    let (status, body) = call(&app, Method::POST, "/set_task_name", Some(json!({"task": "Write report"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["state"]["task"], "Write report");

    let (status, body) = call(&app, Method::POST, "/start_tracking", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "tracking");
    assert_eq!(body["message"], "Write report is being tracked...");

    let (status, body) = call(
        &app,
        Method::POST,
        "/events",
        Some(json!({"type": "mouse_move", "x": 10.0, "y": 20.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event_count"], 1);

    let (status, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tracking"], true);
    assert_eq!(body["session_id"], 1);
    assert_eq!(body["host"], "127.0.0.1");
    assert_eq!(body["port"], 0);

    let (status, body) = call(&app, Method::POST, "/stop_tracking", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["task"], "Write report");
    assert_eq!(body["session"]["event_count"], 1);

    let (_, body) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(body["tracking"], false);
}

#[tokio::test]
async fn blank_task_name_is_a_bad_request() {
    let (app, state) = app();

    let (status, body) = call(&app, Method::POST, "/set_task_name", Some(json!({"task": "  "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(state.status().unwrap().task, None);
}

#[tokio::test]
async fn out_of_order_operations_conflict() {
    let (app, _state) = app();

    let (status, _) = call(&app, Method::POST, "/start_tracking", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(&app, Method::POST, "/stop_tracking", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(
        &app,
        Method::POST,
        "/events",
        Some(json!({"type": "key_press", "key": "a", "code": "KeyA"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    call(&app, Method::POST, "/set_task_name", Some(json!({"task": "Review"}))).await;
    call(&app, Method::POST, "/start_tracking", None).await;
    let (status, body) = call(&app, Method::POST, "/start_tracking", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "already tracking task 'Review'");
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _state) = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let (app, state) = app();

    let (status, body) = call(&app, Method::POST, "/set_task_name", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("task"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/set_task_name")
        .body(Body::from(r#"{"task":"Write report"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(state.status().unwrap().task, None);

    call(&app, Method::POST, "/set_task_name", Some(json!({"task": "Review"}))).await;
    call(&app, Method::POST, "/start_tracking", None).await;
    let (status, body) = call(&app, Method::POST, "/events", Some(json!({"type": "scroll"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(state.status().unwrap().event_count, 0);
}
