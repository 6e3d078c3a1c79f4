//! Timer state structure and tick logic

use serde::{Deserialize, Serialize};

use super::{Action, ScreenMode};

/// Length of one countdown in seconds
pub const DURATION: u32 = 30;

/// Label shown in place of the countdown once a run is over
pub const FINISHED_LABEL: &str = "Finished";

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown decremented, keep ticking
    Continue,
    /// Countdown reached zero and the run is over
    Finished,
    /// The run was stopped or replaced; nothing changed
    Cancelled,
}

/// Everything the timer screen renders from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: ScreenMode,
    /// True while the countdown task should keep ticking
    pub running: bool,
    /// Seconds remaining, in `0..=DURATION`
    pub countdown: u32,
    /// Hourglass opacity, 1.0 at the start of a run and 0.0 at the end
    pub fade: f32,
    /// Generation of the current run, bumped by every start
    pub run_id: u64,
}

impl TimerState {
    /// Create the initial state shown at launch
    pub fn new() -> Self {
        Self {
            mode: ScreenMode::Start,
            running: false,
            countdown: DURATION,
            fade: 1.0,
            run_id: 0,
        }
    }

    /// Reset for a new run and return its id
    pub fn begin_run(&mut self) -> u64 {
        self.run_id = self.run_id.wrapping_add(1);
        self.running = true;
        self.mode = ScreenMode::InProgress;
        self.countdown = DURATION;
        self.fade = 1.0;
        self.run_id
    }

    /// Halt the current run where it stands
    pub fn halt(&mut self) {
        self.running = false;
        self.mode = ScreenMode::Finished;
    }

    /// Whether a countdown task for `run_id` should still be ticking
    pub fn is_current(&self, run_id: u64) -> bool {
        self.running && self.run_id == run_id
    }

    /// Advance the countdown by one second on behalf of `run_id`
    pub fn tick(&mut self, run_id: u64) -> TickOutcome {
        if !self.is_current(run_id) {
            return TickOutcome::Cancelled;
        }

        self.countdown = self.countdown.saturating_sub(1);
        self.fade = fade_for(self.countdown);

        if self.countdown == 0 {
            self.fade = 1.0;
            self.halt();
            return TickOutcome::Finished;
        }

        TickOutcome::Continue
    }

    /// Countdown text, or the finished label on the last screen
    pub fn label(&self) -> String {
        match self.mode {
            ScreenMode::Finished => FINISHED_LABEL.to_string(),
            _ => self.countdown.to_string(),
        }
    }

    /// Build the render view of this state
    pub fn frame(&self) -> Frame {
        Frame {
            mode: self.mode,
            label: self.label(),
            opacity: self.fade,
            action: self.mode.action(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Opacity for a given number of remaining seconds
pub fn fade_for(remaining: u32) -> f32 {
    (remaining.min(DURATION) as f32 / DURATION as f32).clamp(0.0, 1.0)
}

/// What a renderer draws for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub mode: ScreenMode,
    pub label: String,
    pub opacity: f32,
    pub action: Action,
}
