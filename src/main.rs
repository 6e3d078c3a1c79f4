//! Hourglass - A 30-second countdown timer
//!
//! This is the main entry point for the hourglass application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use hourglass::{
    config::Config,
    state::{AppState, DURATION},
    api::create_router,
    tasks::console_renderer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("hourglass={},tower_http=info", config.log_level()))
        .init();

    info!("Starting hourglass v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s",
          config.host, config.port, DURATION);

    // Create the timer controller
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the console renderer background task
    if !config.no_console {
        tokio::spawn(console_renderer_task(Arc::clone(&state)));
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start   - Start a countdown");
    info!("  POST /stop    - Stop the running countdown");
    info!("  POST /restart - Restart after a countdown finished");
    info!("  POST /press   - Press the button the screen shows");
    info!("  GET  /status  - Current timer state and server info");
    info!("  GET  /frame   - What the timer screen shows");
    info!("  GET  /health  - Health check");

    if config.autostart {
        state.start()?;
    }

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
