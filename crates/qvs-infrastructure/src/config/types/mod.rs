//! Configuration types, one module per section

mod app;
mod catalog;
mod logging;
mod search;
mod server;

pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
