//! Application Ports
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`services`] | Service interfaces consumed by transports and the CLI |
//! | [`registry`] | Auto-registration of catalog source providers |

pub mod registry;
pub mod services;

pub use registry::{
    CATALOG_SOURCES, CatalogSourceConfig, CatalogSourceEntry, list_catalog_sources,
    resolve_catalog_source,
};
pub use services::{IndexStoreInterface, SearchServiceInterface};
