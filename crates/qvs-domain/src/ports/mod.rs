//! Domain Port Interfaces
//!
//! Contracts for collaborators implemented outside the domain.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`providers::CatalogSource`] | Reads the persisted catalog document |

/// Provider ports
pub mod providers;

pub use providers::CatalogSource;
