//! Infrastructure layer constants
//!
//! Deployment defaults. Domain constants live in `qvs_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "qvs.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "qvs";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "QVS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// ============================================================================
// CATALOG CONSTANTS
// ============================================================================

/// Default catalog source provider
pub const DEFAULT_CATALOG_PROVIDER: &str = "filesystem";

/// Default location of the built catalog
pub const DEFAULT_CATALOG_PATH: &str = "app/data/index.json";

/// Default generated item count for the stub provider
pub const DEFAULT_STUB_ITEMS: usize = 1000;

/// Default generated vector dimension for the stub provider
pub const DEFAULT_STUB_DIMENSION: usize = 512;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "QVS_LOG";

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "qvs";
