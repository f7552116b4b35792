//! Focus Tools - A task list server with a Pomodoro-style focus timer
//! 
//! This is the main entry point for the focus-tools application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use focus_tools::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{spawn_focus_timer, spawn_pomodoro_recorder},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_tools={},tower_http=info", config.log_level()))
        .init();

    info!("Starting focus-tools server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start background tasks: the recorder first so no completion is missed
    let recorder = spawn_pomodoro_recorder(Arc::clone(&state));
    let driver = spawn_focus_timer(Arc::clone(&state));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET/POST          /api/tasks         - List or create tasks");
    info!("  GET/PUT/DELETE    /api/tasks/:id     - Read, update or delete a task");
    info!("  GET/POST          /api/sessions      - List or record focus sessions");
    info!("  GET               /api/timer         - Current timer state");
    info!("  POST              /api/timer/start   - Start the countdown");
    info!("  POST              /api/timer/pause   - Pause the countdown");
    info!("  POST              /api/timer/toggle  - Start or pause");
    info!("  POST              /api/timer/reset   - Back to a full work interval");
    info!("  PUT               /api/timer/task    - Select the task to credit");
    info!("  GET               /health            - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // No timer wake-up may outlive the server
    driver.abort();
    recorder.abort();

    info!("Server shutdown complete");
    Ok(())
}
