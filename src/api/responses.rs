//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Frame, TimerState};

/// Response for a button press
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
    pub frame: Frame,
}

impl ActionResponse {
    /// Create a new action response from the state a press produced
    pub fn new(message: String, state: TimerState) -> Self {
        let frame = state.frame();
        Self {
            status: state.mode.to_string(),
            message,
            timestamp: Utc::now(),
            state,
            frame,
        }
    }
}

/// Body returned when a press is rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub state: TimerState,
}

impl ErrorResponse {
    /// Create an error response carrying the unchanged state
    pub fn new(message: String, state: TimerState) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
            state,
        }
    }
}

/// Status response with the raw state and its rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub state: TimerState,
    pub frame: Frame,
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
