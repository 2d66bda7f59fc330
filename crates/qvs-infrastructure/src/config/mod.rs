//! Configuration
//!
//! [`AppConfig`] merged from defaults, an optional TOML file and `QVS_`
//! environment variables by [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CatalogConfig, LoggingConfig, SearchConfig, ServerConfig};
