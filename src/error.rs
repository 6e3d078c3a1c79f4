//! Controller error types

use thiserror::Error;

use crate::state::{Action, ScreenMode};

/// Errors returned by timer controller operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The pressed button is not offered on the current screen
    #[error("cannot {action} while on the {screen} screen")]
    InvalidTransition { action: Action, screen: ScreenMode },
}
