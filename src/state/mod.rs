//! State management module
//!
//! This module contains the timer state, its screen modes, and the controller
//! that owns them.

pub mod screen_mode;
pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use screen_mode::{Action, ScreenMode};
pub use app_state::AppState;
pub use timer_state::{Frame, TickOutcome, TimerState, DURATION, FINISHED_LABEL};
