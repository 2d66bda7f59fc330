//! Provider Ports
//!
//! Interfaces for external data providers.

/// Persisted catalog source port
pub mod catalog_source;

pub use catalog_source::CatalogSource;
