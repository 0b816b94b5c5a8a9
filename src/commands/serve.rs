//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // In-memory stores: seeded roles, empty user store
    let app_state = AppState::in_memory();

    // Build router
    let app = create_router(app_state);

    // Start server; CLI arguments win over configuration
    let host = args.host.unwrap_or(config.server_host);
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
