//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! qvs-domain, deployment defaults in qvs-infrastructure.

// ============================================================================
// STUB CATALOG CONSTANTS
// ============================================================================

/// Vector dimension written by the stub builder unless told otherwise
pub const STUB_DEFAULT_DIMENSION: usize = 512;

/// Product count the stub builder stops at unless told otherwise
pub const STUB_DEFAULT_LIMIT: usize = 1000;

/// Generated item count for the `stub` catalog source
pub const STUB_SOURCE_DEFAULT_ITEMS: usize = 1000;

/// Lowest generated price
pub const STUB_PRICE_MIN: f64 = 5.0;

/// Width of the generated price range
pub const STUB_PRICE_SPAN: f64 = 120.0;

/// Separator between description facets
pub const STUB_DESCRIPTION_SEPARATOR: &str = " • ";

/// Web root prefix stripped from product image paths
pub const STUB_IMAGE_PUBLIC_PREFIX: &str = "public/";

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Registry name of the filesystem catalog source
pub const CATALOG_PROVIDER_FILESYSTEM: &str = "filesystem";

/// Registry name of the stub catalog source
pub const CATALOG_PROVIDER_STUB: &str = "stub";
