//! Composition root
//!
//! Wires the configured catalog source into the index store and search
//! service. Components are constructed directly; there is no container.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
