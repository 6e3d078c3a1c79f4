//! Timer screen controller

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Action, ScreenMode, TickOutcome, TimerState, DURATION};
use crate::{error::ControllerError, tasks::countdown_task};

/// Owns the timer state and drives the countdown
///
/// The watch channel holds the one authoritative `TimerState`. Button presses
/// and the countdown task write through the sender; renderers read through
/// receivers handed out by [`AppState::subscribe`].
#[derive(Debug)]
pub struct AppState {
    /// Timer state, observed by renderers
    timer_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    _timer_rx: watch::Receiver<TimerState>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a controller on the start screen
    pub fn new(port: u16, host: String) -> Self {
        let (timer_tx, timer_rx) = watch::channel(TimerState::new());

        Self {
            timer_tx,
            _timer_rx: timer_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Begin a new countdown from the start or finished screen
    pub fn start(self: &Arc<Self>) -> Result<TimerState, ControllerError> {
        self.begin(Action::Start)
    }

    /// Halt the running countdown and show the finished screen
    ///
    /// The countdown task notices on its next tick and exits without touching
    /// the countdown again.
    pub fn stop(&self) -> Result<TimerState, ControllerError> {
        let mut result = Err(ControllerError::InvalidTransition {
            action: Action::Stop,
            screen: ScreenMode::Start,
        });
        self.timer_tx.send_if_modified(|timer| {
            if timer.mode != ScreenMode::InProgress {
                result = Err(ControllerError::InvalidTransition {
                    action: Action::Stop,
                    screen: timer.mode,
                });
                return false;
            }
            timer.halt();
            result = Ok(timer.clone());
            true
        });

        let timer = self.settle(Action::Stop, result)?;
        info!("Countdown stopped at {}s", timer.countdown);
        Ok(timer)
    }

    /// Press the button for `action`, which must be the one the current screen shows
    pub fn press(self: &Arc<Self>, action: Action) -> Result<TimerState, ControllerError> {
        let screen = self.snapshot().mode;
        if screen.action() != action {
            warn!("Rejected {} press on the {} screen", action, screen);
            return Err(ControllerError::InvalidTransition { action, screen });
        }

        match action {
            Action::Start | Action::Restart => self.begin(action),
            Action::Stop => self.stop(),
        }
    }

    /// Press whichever button the current screen shows
    pub fn press_current(self: &Arc<Self>) -> Result<TimerState, ControllerError> {
        let action = self.snapshot().mode.action();
        self.press(action)
    }

    /// Apply one tick on behalf of the countdown task for `run_id`
    pub fn tick(&self, run_id: u64) -> TickOutcome {
        let mut outcome = TickOutcome::Cancelled;
        self.timer_tx.send_if_modified(|timer| {
            outcome = timer.tick(run_id);
            outcome != TickOutcome::Cancelled
        });
        outcome
    }

    /// Current timer state
    pub fn snapshot(&self) -> TimerState {
        self.timer_tx.borrow().clone()
    }

    /// Receiver that wakes on every timer state change
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.timer_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn begin(self: &Arc<Self>, action: Action) -> Result<TimerState, ControllerError> {
        let mut result = Err(ControllerError::InvalidTransition {
            action,
            screen: ScreenMode::InProgress,
        });
        self.timer_tx.send_if_modified(|timer| {
            if !timer.mode.can_start() {
                result = Err(ControllerError::InvalidTransition {
                    action,
                    screen: timer.mode,
                });
                return false;
            }
            timer.begin_run();
            result = Ok(timer.clone());
            true
        });

        let timer = self.settle(action, result)?;
        info!("Countdown of {}s started (run {})", DURATION, timer.run_id);

        tokio::spawn(countdown_task(Arc::clone(self), timer.run_id));
        Ok(timer)
    }

    /// Record a successful press, or pass the rejection through
    fn settle(
        &self,
        action: Action,
        result: Result<TimerState, ControllerError>,
    ) -> Result<TimerState, ControllerError> {
        let timer = result.inspect_err(|e| warn!("{}", e))?;

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.label().to_lowercase());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
        debug!("Recorded {} press", action);

        Ok(timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    fn controller() -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string()))
    }

    /// Sleep `secs` and a half so the tick due at `secs` has landed
    async fn after(secs: u64) {
        sleep(Duration::from_millis(secs * 1000 + 500)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn one_second_takes_one_off_the_countdown() {
        let state = controller();
        state.start().unwrap();

        after(1).await;
        let timer = state.snapshot();
        assert_eq!(timer.countdown, 29);
        assert!((timer.fade - 0.967).abs() < 1e-3);
        assert_eq!(timer.mode, ScreenMode::InProgress);
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_ends_on_finished_screen() {
        let state = controller();
        state.start().unwrap();

        after(30).await;
        let timer = state.snapshot();
        assert_eq!(timer.countdown, 0);
        assert_eq!(timer.fade, 1.0);
        assert!(!timer.running);
        assert_eq!(timer.mode, ScreenMode::Finished);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(state.snapshot(), timer);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_countdown() {
        let state = controller();
        state.start().unwrap();

        after(5).await;
        let timer = state.stop().unwrap();
        assert_eq!(timer.mode, ScreenMode::Finished);
        assert_eq!(timer.countdown, 25);
        assert!(!timer.running);

        sleep(Duration::from_secs(3)).await;
        assert_eq!(state.snapshot().countdown, 25);
        assert_eq!(state.snapshot().mode, ScreenMode::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_completion_resets() {
        let state = controller();
        state.start().unwrap();
        after(30).await;

        let timer = state.press(Action::Restart).unwrap();
        assert_eq!(timer.mode, ScreenMode::InProgress);
        assert_eq!(timer.countdown, DURATION);
        assert_eq!(timer.fade, 1.0);

        after(1).await;
        assert_eq!(state.snapshot().countdown, 29);
    }

    #[tokio::test(start_paused = true)]
    async fn quick_restart_after_stop_ticks_once_per_second() {
        let state = controller();
        state.start().unwrap();
        after(2).await;
        state.stop().unwrap();
        state.start().unwrap();

        // The first run's task wakes at t=3 and must not tick the new run
        sleep(Duration::from_millis(1_200)).await;
        assert_eq!(state.snapshot().countdown, 29);
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_is_rejected() {
        let state = controller();
        let started = state.start().unwrap();

        let err = state.start().unwrap_err();
        assert_eq!(
            err,
            ControllerError::InvalidTransition {
                action: Action::Start,
                screen: ScreenMode::InProgress,
            }
        );
        assert_eq!(state.snapshot().run_id, started.run_id);
    }

    #[test]
    fn stop_outside_a_run_is_rejected() {
        let state = controller();
        assert!(state.stop().is_err());
        assert_eq!(state.snapshot(), TimerState::new());
    }

    #[tokio::test(start_paused = true)]
    async fn press_only_accepts_the_shown_button() {
        let state = controller();
        assert!(state.press(Action::Restart).is_err());
        assert!(state.press(Action::Stop).is_err());

        state.press(Action::Start).unwrap();
        assert!(state.press(Action::Start).is_err());

        let timer = state.press_current().unwrap();
        assert_eq!(timer.mode, ScreenMode::Finished);
        assert_eq!(state.get_last_action().0.as_deref(), Some("stop"));
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_each_tick() {
        let state = controller();
        let mut rx = state.subscribe();
        state.start().unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().countdown, DURATION);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().countdown, DURATION - 1);
    }
}
