//! Server Initialization
//!
//! Loads configuration, installs logging, builds the application context
//! and launches the HTTP transport.

use std::path::Path;

use qvs_infrastructure::config::{AppConfig, ConfigLoader};
use qvs_infrastructure::di::init_app;
use qvs_infrastructure::logging::init_logging;
use tracing::info;

use crate::handlers::SearchState;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Run the vector search server
///
/// The catalog is read on the first search, not here.
pub async fn run_server(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;
    serve(config).await
}

/// Run the server with an already-loaded configuration
///
/// Logging must already be initialized.
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = %config.catalog.provider,
        "Starting vector search server"
    );

    let transport_config = HttpTransportConfig::from(&config.server);
    let context = init_app(config)?;
    let state = SearchState {
        search_service: context.search_service(),
        index_store: context.index_store(),
    };

    HttpTransport::new(transport_config, state)
        .start()
        .await
        .map_err(|e| e as Box<dyn std::error::Error>)
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
