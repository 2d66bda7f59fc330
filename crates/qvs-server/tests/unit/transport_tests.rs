//! Tests for transport configuration and CORS

use crate::test_utils::{axis_catalog, axis_client, client_for, state_for};
use qvs_infrastructure::config::ServerConfig;
use qvs_providers::catalog::InMemoryCatalogSource;
use qvs_server::HttpTransportConfig;
use rocket::http::Status;

#[test]
fn test_config_from_server_section() {
    let server = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 9000,
        enable_cors: false,
    };
    let config = HttpTransportConfig::from(&server);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
    assert!(!config.enable_cors);

    let defaults = HttpTransportConfig::default();
    assert_eq!(defaults.socket_addr().to_string(), "127.0.0.1:8080");
    assert!(defaults.enable_cors);
}

#[test]
fn test_unparsable_host_falls_back_to_loopback() {
    let config = HttpTransportConfig {
        host: "not a host".to_string(),
        ..HttpTransportConfig::localhost(8181)
    };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8181");
}

#[rocket::async_test]
async fn test_cors_headers_when_enabled() {
    let client = axis_client().await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );

    let preflight = client.options("/api/vector-search").dispatch().await;
    assert_eq!(preflight.status(), Status::NoContent);
    assert!(
        preflight
            .headers()
            .get_one("Access-Control-Allow-Methods")
            .is_some_and(|m| m.contains("POST"))
    );
}

#[rocket::async_test]
async fn test_no_cors_headers_when_disabled() {
    let client = client_for(state_for(InMemoryCatalogSource::new(axis_catalog())), false).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}
