//! Provider Registry
//!
//! Catalog sources register themselves at link time and are resolved by
//! name from configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  1. Provider defines:  #[linkme::distributed_slice(CATALOG_SOURCES)]
//! │                        static ENTRY: CatalogSourceEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CATALOG_SOURCES: [Entry] = [..]
//! │                              ↓                                  │
//! │  3. Resolver queries:  CATALOG_SOURCES.iter()                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

/// Catalog source registry
pub mod catalog;

pub use catalog::{
    CATALOG_SOURCES, CatalogSourceConfig, CatalogSourceEntry, list_catalog_sources,
    resolve_catalog_source,
};
