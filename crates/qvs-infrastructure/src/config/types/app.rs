//! Main application configuration

use super::{CatalogConfig, LoggingConfig, SearchConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// Every section falls back to its defaults, so a partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Catalog source configuration
    pub catalog: CatalogConfig,
    /// Result count bounds
    pub search: SearchConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}
