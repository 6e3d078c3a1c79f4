//! Background tasks module
//!
//! This module contains the countdown task and the console renderer that run
//! alongside the HTTP server.

pub mod countdown;
pub mod console_renderer;

// Re-export main functions
pub use countdown::{countdown_task, TICK_PERIOD};
pub use console_renderer::console_renderer_task;
