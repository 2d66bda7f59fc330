//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod prng;

pub use prng::Mulberry32;
