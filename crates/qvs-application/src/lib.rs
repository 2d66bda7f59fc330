//! Application Layer - Quantized Visual Search
//!
//! Implements the search use cases on top of the domain types.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (index store, query contract)
//! - Defines service ports consumed by transports
//! - Hosts the provider registry that catalog sources register into
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `qvs-domain`: For domain types, the codec and provider ports
//! - Pure Rust libraries for async and logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
