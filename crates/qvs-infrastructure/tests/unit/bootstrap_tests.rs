//! Tests for application bootstrap

use qvs_application::ports::services::{IndexStoreInterface, SearchServiceInterface};
use qvs_domain::ports::providers::CatalogSource;
use qvs_domain::{KParam, SearchQuery, codec};
use qvs_infrastructure::config::{CatalogConfig, ConfigBuilder, SearchConfig};
use qvs_infrastructure::di::init_app;

async fn match_count(service: &dyn SearchServiceInterface, probe: &str, k: KParam) -> usize {
    service
        .search(SearchQuery::new(probe, k))
        .await
        .expect("search succeeds")
        .matches
        .len()
}

fn stub_config(items: usize, dim: usize) -> ConfigBuilder {
    ConfigBuilder::new().with_catalog(CatalogConfig {
        provider: "stub".to_string(),
        stub_items: items,
        stub_dim: dim,
        ..CatalogConfig::default()
    })
}

#[tokio::test]
async fn test_init_app_with_stub_catalog_serves_searches() {
    let context = init_app(stub_config(20, 8).build()).expect("bootstrap succeeds");
    assert_eq!(context.catalog_source().provider_name(), "stub");
    assert!(!context.index_store().is_loaded(), "index loads lazily");

    let index = context.index_store().get_index().await.expect("index loads");
    let probe = codec::encode(&index.items()[3].vector);

    let response = context
        .search_service()
        .search(SearchQuery::new(probe, KParam::Absent))
        .await
        .expect("search succeeds");
    assert_eq!(response.matches.len(), 8);
    assert_eq!(response.matches[0].id, "stub-00003");
    assert!(context.index_store().is_loaded());
}

#[tokio::test]
async fn test_configured_bounds_are_applied() {
    let config = stub_config(30, 4)
        .with_search(SearchConfig {
            default_k: 3,
            min_k: 2,
            max_k: 5,
        })
        .build();
    let context = init_app(config).expect("bootstrap succeeds");
    let index = context.index_store().get_index().await.expect("index loads");
    let probe = codec::encode(&index.items()[0].vector);

    let service = context.search_service();
    assert_eq!(match_count(service.as_ref(), &probe, KParam::Absent).await, 3);
    assert_eq!(match_count(service.as_ref(), &probe, KParam::Number(40)).await, 5);
    assert_eq!(match_count(service.as_ref(), &probe, KParam::Invalid).await, 2);
}

#[tokio::test]
async fn test_unknown_provider_fails_bootstrap() {
    let config = ConfigBuilder::new()
        .with_catalog(CatalogConfig {
            provider: "s3".to_string(),
            ..CatalogConfig::default()
        })
        .build();
    let err = init_app(config).unwrap_err();
    assert!(err.to_string().contains("Unknown catalog source 's3'"));
}

#[tokio::test]
async fn test_missing_catalog_file_surfaces_on_first_search() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ConfigBuilder::new()
        .with_catalog(CatalogConfig {
            path: dir.path().join("index.json"),
            ..CatalogConfig::default()
        })
        .build();
    let context = init_app(config).expect("bootstrap does not read the catalog");

    let err = context
        .search_service()
        .search(SearchQuery::new("AQI=", KParam::Absent))
        .await
        .unwrap_err();
    assert!(!err.is_client_error());
    assert!(!context.index_store().is_loaded());
}
