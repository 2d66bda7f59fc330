//! # Quantized Visual Search Server
//!
//! HTTP transport for the vector search query contract.
//!
//! ## Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/api/vector-search` | POST | Rank the catalog against a quantized query |
//! | `/health` | GET | Liveness and index state |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[rocket::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config discovery, environment overrides
//!     qvs_server::run_server(None).await?;
//!     Ok(())
//! }
//! ```

// Allow Rust 2024 compatibility lints from Rocket's codegen
#![allow(rust_2024_compatibility)]

pub mod constants;
pub mod handlers;
pub mod init;
pub mod transport;

pub use handlers::SearchState;
pub use init::run_server;
pub use transport::http::{HttpTransport, HttpTransportConfig};
