//! Hourglass - A 30-second countdown timer
//!
//! This library provides the timer screen controller, its countdown task, and
//! the renderers that observe it: an HTTP API and a console frame logger.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::ControllerError;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
