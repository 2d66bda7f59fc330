//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `qvs_infrastructure::constants`.

// ============================================================================
// QUANTIZATION CONSTANTS
// ============================================================================

/// Scale applied to unit-vector components before rounding
pub const QUANTIZATION_SCALE: f32 = 127.0;

/// Largest quantized component value
pub const QUANTIZED_MAX: i8 = 127;

/// Smallest quantized component value (`-128` is never produced)
pub const QUANTIZED_MIN: i8 = -127;

/// Largest index dimension whose dot products fit the `i32` score
///
/// Decoded components can reach `-128`, so the bound is `i32::MAX / 128²`.
pub const MAX_DIMENSION: usize = i32::MAX as usize / (128 * 128);

// ============================================================================
// TOP-K CONSTANTS
// ============================================================================

/// Smallest result count a query can return
pub const TOP_K_MIN: usize = 1;

/// Largest result count a query can return
pub const TOP_K_MAX: usize = 50;

/// Result count used when the caller does not ask for one
pub const TOP_K_DEFAULT: usize = 8;

// ============================================================================
// ERROR CATEGORY CONSTANTS
// ============================================================================

/// Wire category for missing or undecodable input
pub const ERROR_CATEGORY_MISSING_INPUT: &str = "missing_input";

/// Wire category for internal failures
pub const ERROR_CATEGORY_SERVER: &str = "server_error";
