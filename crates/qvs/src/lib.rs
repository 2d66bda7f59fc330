//! # Quantized Visual Search
//!
//! Visual similarity search over a catalog of int8-quantized image
//! embeddings.
//!
//! This crate is the public facade. It re-exports the layer crates and
//! carries the offline commands behind the `qvs` binary.
//!
//! ## Example
//!
//! ```rust
//! use qvs::codec;
//!
//! let q = codec::quantize_embedding(&[3.0, 4.0]).unwrap();
//! assert_eq!(q.as_slice(), &[76, 102]);
//! assert_eq!(codec::encode(&q), "TGY=");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Codec, value objects, errors and the catalog source port
//! - `application` - Scorer, top-k selection, index store and query contract
//! - `infrastructure` - Config, logging and the composition root
//! - `server` - HTTP transport

/// Offline commands behind the `qvs` binary
pub mod cli;

/// Domain layer - codec, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use qvs_domain::*;
}

/// Application layer - ranking and use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use qvs_application::*;
}

/// Server layer - HTTP transport and handlers
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use qvs_server::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use qvs_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run_server;
