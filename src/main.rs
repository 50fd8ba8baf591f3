//! Track Event - A task tracking form over a session-owning backend
//!
//! This is the main entry point for the track-event application.

use std::sync::Arc;
use tokio::{io::BufReader, net::TcpListener};
use tracing::{info, warn};

use track_event::{
    api::create_router,
    backend::LocalBackend,
    config::Config,
    form::TrackingForm,
    state::AppState,
    tasks::terminal_form_task,
    utils::shutdown_signal,
    TrackerError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("track_event={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting track-event v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, log_dir={:?}, interactive={}",
        config.host, config.port, config.log_dir, config.interactive
    );

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.log_dir.clone()));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /set_task_name  - Record the task name");
    info!("  POST /start_tracking - Open a tracking session");
    info!("  POST /stop_tracking  - Close the tracking session");
    info!("  POST /events         - Record an input event");
    info!("  GET  /status         - Check current status");
    info!("  GET  /health         - Health check");

    let server = axum::serve(listener, app);

    // The terminal form only finishes when stdin closes; without it, wait forever
    let terminal = {
        let form_state = Arc::clone(&state);
        let interactive = config.interactive;
        async move {
            if interactive {
                let form = TrackingForm::new(LocalBackend::new(form_state));
                let stdin = BufReader::new(tokio::io::stdin());
                terminal_form_task(form, stdin, tokio::io::stdout()).await.map(|_| ())
            } else {
                std::future::pending().await
            }
        }
    };

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to install signal handler: {}", e),
            }
        }
        result = terminal => {
            if let Err(e) = result {
                tracing::error!("Terminal form error: {}", e);
            }
        }
    }

    // Close any open session so its log is written
    match state.stop_tracking().await {
        Ok(summary) => info!("Closed session {} for '{}' on shutdown", summary.id, summary.task),
        Err(TrackerError::NotTracking) => {}
        Err(e) => warn!("Failed to close session on shutdown: {}", e),
    }

    info!("Server shutdown complete");
    Ok(())
}
