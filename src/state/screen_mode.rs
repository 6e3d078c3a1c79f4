//! Screen modes and the action button each one shows

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which screen the timer is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenMode {
    #[default]
    Start,
    InProgress,
    Finished,
}

impl ScreenMode {
    /// The single button offered on this screen
    pub fn action(self) -> Action {
        match self {
            ScreenMode::Start => Action::Start,
            ScreenMode::InProgress => Action::Stop,
            ScreenMode::Finished => Action::Restart,
        }
    }

    /// Whether a new run may begin from this screen
    pub fn can_start(self) -> bool {
        matches!(self, ScreenMode::Start | ScreenMode::Finished)
    }
}

impl fmt::Display for ScreenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenMode::Start => "start",
            ScreenMode::InProgress => "in_progress",
            ScreenMode::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// A button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Action {
    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            Action::Start => "START",
            Action::Stop => "STOP",
            Action::Restart => "RESTART",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
