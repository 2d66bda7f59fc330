//! Server constants

/// Upper bound on a raw request body, in kibibytes
///
/// A 4096-dimension query is under 6 KiB of base64.
pub const MAX_BODY_KIB: u64 = 256;

/// Value of `Access-Control-Allow-Methods`
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
