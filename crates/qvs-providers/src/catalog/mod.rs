//! Catalog Source Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | FilesystemCatalogSource | Local | Catalog JSON written by the build pipeline |
//! | StubCatalogSource | Development | Deterministic generated catalog, no disk access |
//! | InMemoryCatalogSource | Testing | Fixed document or failure, counts loads |
//!
//! ## Provider Selection Guide
//!
//! - **Production**: `filesystem`, pointed at the built catalog
//! - **Serving before embeddings exist**: `stub`
//! - **Unit tests**: construct `InMemoryCatalogSource` directly (not registered)

pub mod filesystem;
pub mod in_memory;
pub mod stub;

pub use filesystem::FilesystemCatalogSource;
pub use in_memory::InMemoryCatalogSource;
pub use stub::{ProductRecord, StubCatalogBuilder, StubCatalogSource, resolve_limit};
