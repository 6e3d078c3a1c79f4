//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

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
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/restart", post(restart_handler))
        .route("/press", post(press_handler))
        .route("/status", get(status_handler))
        .route("/frame", get(frame_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state() -> Arc<AppState> {
        Arc::new(AppState::new(20530, "127.0.0.1".to_string()))
    }

    async fn call(state: &Arc<AppState>, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = create_router(Arc::clone(state))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn start_then_stop_over_http() {
        let state = app_state();

        let (status, body) = call(&state, Method::POST, "/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "in_progress");
        assert_eq!(body["frame"]["label"], "30");
        assert_eq!(body["frame"]["action"], "stop");

        tokio::time::sleep(Duration::from_millis(3_500)).await;

        let (status, body) = call(&state, Method::POST, "/stop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["countdown"], 27);
        assert_eq!(body["state"]["running"], false);
        assert_eq!(body["frame"]["label"], "Finished");
        assert_eq!(body["frame"]["action"], "restart");
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_button_is_a_conflict() {
        let state = app_state();

        let (status, body) = call(&state, Method::POST, "/restart").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], "error");
        assert_eq!(body["state"]["mode"], "start");

        call(&state, Method::POST, "/start").await;
        let (status, _) = call(&state, Method::POST, "/start").await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test(start_paused = true)]
    async fn press_cycles_through_screens() {
        let state = app_state();

        let (_, body) = call(&state, Method::POST, "/press").await;
        assert_eq!(body["state"]["mode"], "in_progress");
        let (_, body) = call(&state, Method::POST, "/press").await;
        assert_eq!(body["state"]["mode"], "finished");
        let (_, body) = call(&state, Method::POST, "/press").await;
        assert_eq!(body["state"]["mode"], "in_progress");
        assert_eq!(body["state"]["countdown"], 30);
    }

    #[tokio::test]
    async fn status_reports_initial_state() {
        let state = app_state();

        let (status, body) = call(&state, Method::GET, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["mode"], "start");
        assert_eq!(body["state"]["countdown"], 30);
        assert_eq!(body["frame"]["opacity"], 1.0);
        assert_eq!(body["port"], 20530);
        assert!(body["last_action"].is_null());
    }

    #[tokio::test]
    async fn frame_and_health_endpoints() {
        let state = app_state();

        let (_, frame) = call(&state, Method::GET, "/frame").await;
        assert_eq!(frame["label"], "30");
        assert_eq!(frame["action"], "start");

        let (status, health) = call(&state, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");
    }
}
