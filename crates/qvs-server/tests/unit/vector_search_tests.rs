//! Tests for the vector search routes

use crate::test_utils::{axis_catalog, axis_client, client_for, state_for};
use qvs_domain::{CatalogDocument, CatalogRecord, QuantizedVector, SearchResponse, codec};
use qvs_providers::catalog::InMemoryCatalogSource;
use qvs_server::handlers::ErrorResponse;
use rocket::http::{ContentType, Status};

// [0, 127] as base64
const QUERY_B: &str = "AH8=";

#[rocket::async_test]
async fn test_json_request_returns_ranked_matches() {
    let client = axis_client().await;

    let response = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{QUERY_B}","k":2}}"#))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: SearchResponse = response.into_json().await.expect("json body");
    assert_eq!(body.matches.len(), 2);
    assert_eq!(body.matches[0].id, "B");
    assert_eq!(body.matches[0].score, 16_129);
    assert_eq!(body.matches[0].image, "/products/B.jpg");
    assert_eq!(body.matches[0].title, "Item B");
    assert_eq!(body.matches[0].description, "Unisex • Accessories");
    assert_eq!(body.matches[1].id, "A");
}

#[rocket::async_test]
async fn test_response_shape_on_the_wire() {
    let client = axis_client().await;

    let response = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{QUERY_B}","k":1}}"#))
        .dispatch()
        .await;

    let value: serde_json::Value = response.into_json().await.expect("json body");
    let first = &value["matches"][0];
    for field in ["id", "image", "title", "price", "description", "score"] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["matches"].as_array().map(Vec::len), Some(1));
}

#[rocket::async_test]
async fn test_form_request_matches_json_request() {
    let client = axis_client().await;

    let form = client
        .post("/api/vector-search")
        .header(ContentType::Form)
        .body("q_b64=AH8%3D&k=1")
        .dispatch()
        .await;
    assert_eq!(form.status(), Status::Ok);
    let form_body: SearchResponse = form.into_json().await.expect("json body");

    let json = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{QUERY_B}","k":"1"}}"#))
        .dispatch()
        .await;
    let json_body: SearchResponse = json.into_json().await.expect("json body");

    assert_eq!(form_body, json_body);
    assert_eq!(form_body.matches[0].id, "B");
}

#[rocket::async_test]
async fn test_untyped_body_is_read_as_json() {
    let client = axis_client().await;

    let response = client
        .post("/api/vector-search")
        .body(format!(r#"{{"q_b64":"{QUERY_B}"}}"#))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: SearchResponse = response.into_json().await.expect("json body");
    assert_eq!(body.matches.len(), 2, "default k covers the whole catalog");
}

#[rocket::async_test]
async fn test_k_is_clamped_not_rejected() {
    let client = axis_client().await;

    for k in ["-5", "0", "\"lots\"", "null"] {
        let response = client
            .post("/api/vector-search")
            .header(ContentType::JSON)
            .body(format!(r#"{{"q_b64":"{QUERY_B}","k":{k}}}"#))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok, "k = {k}");
    }
}

#[rocket::async_test]
async fn test_missing_or_malformed_input_is_400() {
    let client = axis_client().await;

    let cases = [
        (ContentType::JSON, "{}".to_string()),
        (ContentType::JSON, r#"{"q_b64":""}"#.to_string()),
        (ContentType::JSON, r#"{"q_b64": 42}"#.to_string()),
        (ContentType::JSON, "not json at all".to_string()),
        (ContentType::JSON, r#"{"q_b64":"@@@"}"#.to_string()),
        (ContentType::JSON, r#"{"q_b64":"AQID"}"#.to_string()),
        (ContentType::Form, "k=3".to_string()),
    ];
    for (content_type, body) in cases {
        let response = client
            .post("/api/vector-search")
            .header(content_type)
            .body(body.clone())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest, "body: {body}");
        let error: ErrorResponse = response.into_json().await.expect("json body");
        assert_eq!(error.error, "missing_input");
    }
}

async fn assert_missing_input(response: rocket::local::asynchronous::LocalResponse<'_>) {
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let error: ErrorResponse = response.into_json().await.expect("json body");
    assert_eq!(error.error, "missing_input");
}

#[rocket::async_test]
async fn test_non_utf8_body_is_missing_input() {
    let client = axis_client().await;

    for content_type in [ContentType::JSON, ContentType::Form] {
        let response = client
            .post("/api/vector-search")
            .header(content_type)
            .body([0xff_u8, 0xfe, 0x7b])
            .dispatch()
            .await;
        assert_missing_input(response).await;
    }
}

#[rocket::async_test]
async fn test_oversized_body_is_missing_input() {
    let client = axis_client().await;
    let huge = "A".repeat(300 * 1024);

    let json = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{huge}"}}"#))
        .dispatch()
        .await;
    assert_missing_input(json).await;

    let form = client
        .post("/api/vector-search")
        .header(ContentType::Form)
        .body(format!("q_b64={huge}"))
        .dispatch()
        .await;
    assert_missing_input(form).await;
}

#[rocket::async_test]
async fn test_malformed_form_is_missing_input() {
    let client = axis_client().await;

    for body in ["q_b64=%ZZ&k", "&&==&", "q_b64"] {
        let response = client
            .post("/api/vector-search")
            .header(ContentType::Form)
            .body(body)
            .dispatch()
            .await;
        assert_missing_input(response).await;
    }
}

#[rocket::async_test]
async fn test_unknown_route_answers_with_json_category() {
    let client = axis_client().await;

    let response = client.get("/api/nothing-here").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let error: ErrorResponse = response.into_json().await.expect("json body");
    assert_eq!(error.error, "missing_input");
}

#[rocket::async_test]
async fn test_oversized_catalog_dimension_is_500_json() {
    let document = CatalogDocument {
        dim: 140_000,
        items: vec![CatalogRecord {
            id: "wide".to_string(),
            image: "/products/wide.jpg".to_string(),
            title: "Wide".to_string(),
            price: 1.0,
            description: String::new(),
            vec_b64: codec::encode(&QuantizedVector::from(vec![127; 140_000])),
        }],
    };
    let client = client_for(state_for(InMemoryCatalogSource::new(document)), true).await;
    let query = codec::encode(&QuantizedVector::from(vec![127; 140_000]));

    let response = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{query}"}}"#))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let error: ErrorResponse = response.into_json().await.expect("json body");
    assert_eq!(error.error, "server_error");
}

#[rocket::async_test]
async fn test_index_failure_is_500_without_details() {
    let client = client_for(
        state_for(InMemoryCatalogSource::failing("secret path /etc/catalog")),
        true,
    )
    .await;

    let response = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{QUERY_B}"}}"#))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::InternalServerError);
    let text = response.into_string().await.expect("body");
    assert!(!text.contains("secret"));
    let error: ErrorResponse = serde_json::from_str(&text).expect("json body");
    assert_eq!(error.error, "server_error");
}

#[rocket::async_test]
async fn test_empty_catalog_returns_empty_matches() {
    let mut document = axis_catalog();
    document.items.clear();
    let client = client_for(state_for(InMemoryCatalogSource::new(document)), true).await;

    let response = client
        .post("/api/vector-search")
        .header(ContentType::JSON)
        .body(format!(r#"{{"q_b64":"{QUERY_B}"}}"#))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_string().await.as_deref(),
        Some(r#"{"matches":[]}"#)
    );
}
