//! Stub catalog generation
//!
//! Deterministic pseudo-random catalogs for serving before a real embedding
//! build exists. Every item's vector depends only on its id, so rebuilding
//! the stub from the same products gives byte-identical output.
//!
//! Stub vectors are uniform noise, not unit vectors; rankings over them are
//! deterministic but carry no visual meaning.

use crate::constants::{
    CATALOG_PROVIDER_STUB, STUB_DEFAULT_DIMENSION, STUB_DEFAULT_LIMIT, STUB_DESCRIPTION_SEPARATOR,
    STUB_IMAGE_PUBLIC_PREFIX, STUB_PRICE_MIN, STUB_PRICE_SPAN, STUB_SOURCE_DEFAULT_ITEMS,
};
use crate::utils::Mulberry32;
use async_trait::async_trait;
use qvs_domain::codec;
use qvs_domain::error::{Error, Result};
use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::{CatalogDocument, CatalogRecord, QuantizedVector};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// One line of the products JSONL file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product id, a string or a number in the source data
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Display name
    pub product_display_name: Option<String>,
    /// Target gender
    pub gender: Option<String>,
    /// Top-level category
    pub master_category: Option<String>,
    /// Second-level category
    pub sub_category: Option<String>,
    /// Article type
    pub article_type: Option<String>,
    /// Base colour
    pub base_colour: Option<String>,
    /// Image path relative to the project root
    #[serde(rename = "image_path")]
    pub image_path: Option<String>,
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "product id must be a string or number, got {other}"
        ))),
    }
}

impl ProductRecord {
    /// Parse the first `limit` non-empty lines of a products JSONL file
    pub fn parse_lines(text: &str, limit: usize) -> Result<Vec<Self>> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .take(limit)
            .enumerate()
            .map(|(n, line)| {
                serde_json::from_str(line)
                    .map_err(|e| Error::invalid_input(format!("product line {}: {e}", n + 1)))
            })
            .collect()
    }

    fn title(&self) -> String {
        self.product_display_name
            .clone()
            .unwrap_or_else(|| self.id.clone())
    }

    fn description(&self) -> String {
        [
            &self.gender,
            &self.master_category,
            &self.sub_category,
            &self.article_type,
            &self.base_colour,
        ]
        .into_iter()
        .filter_map(|facet| facet.as_deref().filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join(STUB_DESCRIPTION_SEPARATOR)
    }

    fn image(&self) -> String {
        let path = self
            .image_path
            .clone()
            .unwrap_or_else(|| format!("public/products/{}.jpg", self.id));
        match path.strip_prefix(STUB_IMAGE_PUBLIC_PREFIX) {
            Some(rest) => format!("/{rest}"),
            None => path,
        }
    }
}

/// Count of products to include when building a stub catalog
///
/// An explicit count wins, then a numeric `MAX_ITEMS` value, then
/// `min(1000, available)`.
pub fn resolve_limit(explicit: Option<usize>, env_value: Option<&str>, available: usize) -> usize {
    explicit
        .or_else(|| env_value.and_then(|v| v.trim().parse().ok()))
        .unwrap_or_else(|| available.min(STUB_DEFAULT_LIMIT))
}

/// Builds catalog documents with id-seeded vectors
#[derive(Debug, Clone, Copy)]
pub struct StubCatalogBuilder {
    dimension: usize,
}

impl Default for StubCatalogBuilder {
    fn default() -> Self {
        Self::new(STUB_DEFAULT_DIMENSION)
    }
}

impl StubCatalogBuilder {
    /// Builder producing vectors of `dimension` components
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Vector dimension of generated items
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Seed derived from an id: wrapping sum of each character's first UTF-16 unit
    pub fn seed_for_id(id: &str) -> u32 {
        let mut buf = [0u16; 2];
        id.chars().fold(0u32, |seed, c| {
            seed.wrapping_add(u32::from(c.encode_utf16(&mut buf)[0]))
        })
    }

    /// Generated vector and price for an id
    ///
    /// Components are `floor(r * 255) - 127`, then one more draw sets the
    /// price in `[5, 125)` rounded to cents.
    pub fn generate(&self, id: &str) -> (QuantizedVector, f64) {
        let mut rng = Mulberry32::new(Self::seed_for_id(id));
        let vector = (0..self.dimension)
            .map(|_| ((rng.next_f64() * 255.0).floor() as i16 - 127) as i8)
            .collect();
        let price = STUB_PRICE_MIN + rng.next_f64() * STUB_PRICE_SPAN;
        (vector, (price * 100.0).round() / 100.0)
    }

    /// Catalog record for one product
    pub fn record(&self, product: &ProductRecord) -> CatalogRecord {
        let (vector, price) = self.generate(&product.id);
        CatalogRecord {
            id: product.id.clone(),
            image: product.image(),
            title: product.title(),
            price,
            description: product.description(),
            vec_b64: codec::encode(&vector),
        }
    }

    /// Catalog document for a list of products, in input order
    pub fn build(&self, products: &[ProductRecord]) -> CatalogDocument {
        CatalogDocument {
            dim: self.dimension,
            items: products.iter().map(|p| self.record(p)).collect(),
        }
    }
}

/// Catalog source generating a synthetic catalog in memory
#[derive(Debug, Clone)]
pub struct StubCatalogSource {
    items: usize,
    builder: StubCatalogBuilder,
}

impl StubCatalogSource {
    /// Source generating `items` items of `dimension` components
    pub fn new(items: usize, dimension: usize) -> Self {
        Self {
            items,
            builder: StubCatalogBuilder::new(dimension),
        }
    }

    fn product(position: usize) -> ProductRecord {
        let id = format!("stub-{position:05}");
        ProductRecord {
            product_display_name: Some(format!("Stub item {position}")),
            master_category: Some("Stub".to_string()),
            image_path: Some(format!("/products/{id}.jpg")),
            id,
            ..ProductRecord::default()
        }
    }
}

#[async_trait]
impl CatalogSource for StubCatalogSource {
    async fn load(&self) -> Result<CatalogDocument> {
        debug!(
            items = self.items,
            dim = self.builder.dimension(),
            "generating stub catalog"
        );
        let products: Vec<ProductRecord> = (0..self.items).map(Self::product).collect();
        Ok(self.builder.build(&products))
    }

    fn describe(&self) -> String {
        format!("stub:{}x{}", self.items, self.builder.dimension())
    }

    fn provider_name(&self) -> &str {
        CATALOG_PROVIDER_STUB
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use qvs_application::ports::registry::{
    CATALOG_SOURCES, CatalogSourceConfig, CatalogSourceEntry,
};

/// Factory function for creating stub catalog source instances.
fn stub_catalog_source_factory(
    config: &CatalogSourceConfig,
) -> std::result::Result<Arc<dyn CatalogSource>, String> {
    let items = config.items.unwrap_or(STUB_SOURCE_DEFAULT_ITEMS);
    let dimensions = config.dimensions.unwrap_or(STUB_DEFAULT_DIMENSION);
    if dimensions == 0 {
        return Err("stub catalog source requires a dimension of at least 1".to_string());
    }
    Ok(Arc::new(StubCatalogSource::new(items, dimensions)))
}

#[linkme::distributed_slice(CATALOG_SOURCES)]
static STUB_PROVIDER: CatalogSourceEntry = CatalogSourceEntry {
    name: CATALOG_PROVIDER_STUB,
    description: "Deterministic generated catalog (development aid)",
    factory: stub_catalog_source_factory,
};
