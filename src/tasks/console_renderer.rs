//! Console renderer background task

use std::sync::Arc;
use tracing::{debug, info};

use crate::state::{AppState, Frame};

const BAR_WIDTH: usize = 20;

/// Log one line per timer state change until the controller goes away
pub async fn console_renderer_task(state: Arc<AppState>) {
    info!("Starting console renderer task");

    let mut timer_rx = state.subscribe();
    drop(state);

    let frame = timer_rx.borrow_and_update().frame();
    info!("{}", render_line(&frame));

    while timer_rx.changed().await.is_ok() {
        let frame = timer_rx.borrow_and_update().frame();
        info!("{}", render_line(&frame));
    }

    debug!("Timer channel closed, console renderer exiting");
}

/// One console line for a frame: label, opacity bar, and the offered button
pub fn render_line(frame: &Frame) -> String {
    format!(
        "{:>8} [{}] {:>3}% <{}>",
        frame.label,
        opacity_bar(frame.opacity),
        (frame.opacity * 100.0).round() as u32,
        frame.action,
    )
}

/// Hourglass opacity as a fixed-width bar of sand
fn opacity_bar(opacity: f32) -> String {
    let filled = (opacity.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
