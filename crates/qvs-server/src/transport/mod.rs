//! Transports

pub mod http;
