//! Tests for stub catalog generation

use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::{codec, CatalogIndex};
use qvs_providers::catalog::{ProductRecord, StubCatalogBuilder, StubCatalogSource, resolve_limit};

fn product(id: &str) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        ..ProductRecord::default()
    }
}

#[test]
fn test_seed_is_sum_of_code_units() {
    assert_eq!(StubCatalogBuilder::seed_for_id("a"), 97);
    assert_eq!(StubCatalogBuilder::seed_for_id("15970"), 262);
    assert_eq!(StubCatalogBuilder::seed_for_id(""), 0);
}

#[test]
fn test_generated_vector_matches_reference_stream() {
    let builder = StubCatalogBuilder::new(8);
    let (vector, price) = builder.generate("15970");
    assert_eq!(vector.as_slice(), &[18, -9, 50, 16, -34, -117, 4, -89]);
    assert!((price - 53.59).abs() < 1e-9);
    assert_eq!(codec::encode(&vector), "EvcyEN6LBKc=");
}

#[test]
fn test_generation_is_deterministic_per_id() {
    let builder = StubCatalogBuilder::new(512);
    assert_eq!(builder.generate("1163"), builder.generate("1163"));
    assert_ne!(builder.generate("1163").0, builder.generate("1164").0);
}

#[test]
fn test_components_and_price_stay_in_range() {
    let builder = StubCatalogBuilder::new(512);
    for id in ["1", "abc", "stub-00042", "99999"] {
        let (vector, price) = builder.generate(id);
        assert_eq!(vector.len(), 512);
        assert!(vector.as_slice().iter().all(|&c| (-127..=127).contains(&c)));
        assert!((5.0..125.0).contains(&price), "price {price} for {id}");
    }
}

#[test]
fn test_record_metadata_from_product_fields() {
    let line = r#"{"id":15970,"productDisplayName":"Navy Blue Shirt","gender":"Men","masterCategory":"Apparel","subCategory":"Topwear","articleType":"Shirts","baseColour":"","image_path":"public/products/15970.jpg"}"#;
    let products = ProductRecord::parse_lines(line, 10).expect("valid line");
    let record = StubCatalogBuilder::new(4).record(&products[0]);

    assert_eq!(record.id, "15970");
    assert_eq!(record.title, "Navy Blue Shirt");
    assert_eq!(record.description, "Men • Apparel • Topwear • Shirts");
    assert_eq!(record.image, "/products/15970.jpg");
}

#[test]
fn test_record_defaults_when_fields_missing() {
    let record = StubCatalogBuilder::new(4).record(&product("77"));
    assert_eq!(record.title, "77");
    assert_eq!(record.description, "");
    assert_eq!(record.image, "/products/77.jpg");
}

#[test]
fn test_image_path_outside_public_is_kept() {
    let mut p = product("5");
    p.image_path = Some("https://cdn.example.com/5.jpg".to_string());
    let record = StubCatalogBuilder::new(4).record(&p);
    assert_eq!(record.image, "https://cdn.example.com/5.jpg");
}

#[test]
fn test_parse_lines_skips_blank_lines_and_honours_limit() {
    let text = "{\"id\":\"1\"}\n\n{\"id\":\"2\"}\r\n{\"id\":\"3\"}\n";
    let products = ProductRecord::parse_lines(text, 2).expect("valid lines");
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_parse_lines_reports_bad_line() {
    let err = ProductRecord::parse_lines("{\"id\":\"1\"}\nnot json\n", 10)
        .expect_err("second line is invalid");
    assert!(err.to_string().contains("product line 2"));
}

#[test]
fn test_resolve_limit_precedence() {
    assert_eq!(resolve_limit(Some(3), Some("7"), 5000), 3);
    assert_eq!(resolve_limit(None, Some("7"), 5000), 7);
    assert_eq!(resolve_limit(None, Some("lots"), 5000), 1000);
    assert_eq!(resolve_limit(None, None, 20), 20);
}

#[test]
fn test_built_document_forms_a_valid_index() {
    let products: Vec<ProductRecord> = ["1", "2", "3"].into_iter().map(product).collect();
    let document = StubCatalogBuilder::new(16).build(&products);
    assert_eq!(document.dim, 16);

    let index = CatalogIndex::from_document(document).expect("stub catalog is valid");
    assert_eq!(index.len(), 3);
    assert_eq!(index.dimension(), 16);
}

#[tokio::test]
async fn test_stub_source_generates_requested_shape() {
    let source = StubCatalogSource::new(25, 32);
    let document = source.load().await.expect("stub load never fails");

    assert_eq!(document.dim, 32);
    assert_eq!(document.items.len(), 25);
    assert_eq!(document.items[0].id, "stub-00000");
    assert_eq!(document.items[24].id, "stub-00024");
    assert_eq!(source.provider_name(), "stub");
    assert_eq!(source.describe(), "stub:25x32");

    let again = source.load().await.expect("stub load never fails");
    assert_eq!(document, again);
}
