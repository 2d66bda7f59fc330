//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML and environment configuration |
//! | [`di`] | Composition root wiring providers into use cases |
//! | [`constants`] | Deployment defaults and configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Support
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`utils`] | Timing and file helpers |

// Force linkme registration of all providers from qvs-providers
extern crate qvs_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
pub use utils::{FileUtils, TimedOperation};
