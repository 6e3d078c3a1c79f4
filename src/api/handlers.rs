//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    error::ControllerError,
    state::{Action, AppState, Frame, TimerState},
};
use super::responses::{ActionResponse, ErrorResponse, HealthResponse, StatusResponse};

type PressResult = Result<Json<ActionResponse>, (StatusCode, Json<ErrorResponse>)>;

/// Turn a controller result into an HTTP response
fn respond(state: &AppState, result: Result<TimerState, ControllerError>) -> PressResult {
    match result {
        Ok(timer) => {
            let message = format!("Timer is now on the {} screen", timer.mode);
            Ok(Json(ActionResponse::new(message, timer)))
        }
        Err(e) => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(e.to_string(), state.snapshot())),
        )),
    }
}

/// Handle POST /start - Press the start button
pub async fn start_handler(State(state): State<Arc<AppState>>) -> PressResult {
    info!("Start endpoint called");
    respond(&state, state.press(Action::Start))
}

/// Handle POST /stop - Press the stop button
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> PressResult {
    info!("Stop endpoint called");
    respond(&state, state.press(Action::Stop))
}

/// Handle POST /restart - Press the restart button
pub async fn restart_handler(State(state): State<Arc<AppState>>) -> PressResult {
    info!("Restart endpoint called");
    respond(&state, state.press(Action::Restart))
}

/// Handle POST /press - Press whichever button the screen shows
pub async fn press_handler(State(state): State<Arc<AppState>>) -> PressResult {
    info!("Press endpoint called");
    respond(&state, state.press_current())
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        frame: timer.frame(),
        state: timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /frame - Return what a renderer should draw
pub async fn frame_handler(State(state): State<Arc<AppState>>) -> Json<Frame> {
    Json(state.snapshot().frame())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
