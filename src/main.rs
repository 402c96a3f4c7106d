//! Main entry point for the Model Bundle Gateway

use model_bundle_gateway::{
    api,
    config::{LoggingConfig, Settings},
    model::resolve_index_file,
    AppState,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    init_tracing(&settings.logging);

    info!("Starting Model Bundle Gateway");
    info!(
        "Loaded configuration: server={}:{}, downloads={}",
        settings.server.host,
        settings.server.port,
        settings.downloads_path().display()
    );

    // Resolve the served model once; it never changes afterwards
    let app_state = Arc::new(AppState::from_settings(settings));

    if let Some(model_dir) = app_state.selection.dir() {
        if resolve_index_file(model_dir).await.is_none() {
            warn!(
                model_dir = %model_dir.display(),
                "Model has neither index.modified.html nor index.html"
            );
        }
    }

    // Build the router
    let app = api::routes::create_router(app_state.clone());

    let addr = app_state.settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://127.0.0.1:{}", app_state.settings.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "text" {
        registry.with(fmt::layer()).init();
    } else {
        registry.with(fmt::layer().json()).init();
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
