//! # Quantized Visual Search - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `qvs-domain`.
//! Each provider registers itself in the `qvs-application` registry at link
//! time; binaries pull this crate in with `extern crate qvs_providers;`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Catalog | `CatalogSource` | Filesystem, Stub, InMemory (tests) |
//!
//! ## Usage
//!
//! ```ignore
//! use qvs_providers::catalog::FilesystemCatalogSource;
//! use qvs_providers::catalog::StubCatalogBuilder;
//! ```

// Re-export qvs-domain types commonly used with providers
pub use qvs_domain::error::{Error, Result};
pub use qvs_domain::ports::providers::CatalogSource;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Catalog source implementations
///
/// Implements `CatalogSource` for persisted and generated catalogs.
pub mod catalog;

pub use catalog::{
    FilesystemCatalogSource, InMemoryCatalogSource, ProductRecord, StubCatalogBuilder,
    StubCatalogSource,
};
