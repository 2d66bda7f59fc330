use crate::error::Result;
use crate::value_objects::CatalogDocument;
use async_trait::async_trait;

/// Persisted Catalog Source
///
/// Produces the catalog document the index is built from. Implementations
/// only read and parse; structural validation belongs to
/// [`crate::value_objects::CatalogIndex::from_document`].
///
/// # Example
///
/// ```ignore
/// use qvs_domain::ports::providers::CatalogSource;
///
/// let document = source.load().await?;
/// println!("{} declares {} items", source.describe(), document.items.len());
/// ```
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Read the catalog document
    async fn load(&self) -> Result<CatalogDocument>;

    /// Human-readable location of the catalog, used in logs
    fn describe(&self) -> String;

    /// Registry name of the provider (e.g., "filesystem", "stub")
    fn provider_name(&self) -> &str;
}
