//! Tests for the offline commands

use clap::Parser;
use qvs::cli::{self, BuildStubArgs, Cli, Command, EncodeArgs, SearchArgs};
use qvs::{CatalogDocument, SearchMatch, SearchResponse};
use qvs_infrastructure::ConfigBuilder;
use qvs_infrastructure::config::CatalogConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PRODUCTS: &str = concat!(
    r#"{"id":15970,"productDisplayName":"Navy Blue Shirt","gender":"Men","masterCategory":"Apparel","subCategory":"Topwear","articleType":"Shirts","baseColour":"Navy Blue","image_path":"public/products/15970.jpg"}"#,
    "\n\n",
    r#"{"id":"39386","productDisplayName":"Blue Jeans","gender":"Men","image_path":"public/products/39386.jpg"}"#,
    "\n",
    r#"{"id":"59263"}"#,
    "\n",
);

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn stub_args(dir: &TempDir, limit: Option<usize>, dim: usize) -> BuildStubArgs {
    BuildStubArgs {
        products: write(dir, "products.jsonl", PRODUCTS),
        out: dir.path().join("data").join("index.json"),
        limit,
        dim,
    }
}

fn read_catalog(path: &Path) -> CatalogDocument {
    let text = std::fs::read_to_string(path).expect("catalog written");
    serde_json::from_str(&text).expect("catalog is valid json")
}

#[test]
fn test_no_subcommand_means_serve() {
    let cli = Cli::try_parse_from(["qvs"]).expect("parses");
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());

    let cli = Cli::try_parse_from(["qvs", "serve", "--config", "qvs.toml"]).expect("parses");
    assert!(matches!(cli.command, Some(Command::Serve)));
    assert_eq!(cli.config.as_deref(), Some(Path::new("qvs.toml")));
}

#[test]
fn test_search_arguments() {
    let cli = Cli::try_parse_from(["qvs", "search", "--embedding", "q.json", "--k", "3"])
        .expect("parses");
    let Some(Command::Search(args)) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.embedding, PathBuf::from("q.json"));
    assert_eq!(args.k, Some(3));
}

#[test]
fn test_build_stub_defaults() {
    let cli = Cli::try_parse_from([
        "qvs",
        "build-stub",
        "--products",
        "styles.jsonl",
        "--out",
        "index.json",
    ])
    .expect("parses");
    let Some(Command::BuildStub(args)) = cli.command else {
        panic!("expected build-stub command");
    };
    assert_eq!(args.dim, 512);
    assert_eq!(args.limit, None);
}

#[test]
fn test_build_stub_requires_paths() {
    assert!(Cli::try_parse_from(["qvs", "build-stub", "--out", "index.json"]).is_err());
}

#[tokio::test]
async fn test_build_stub_writes_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let args = stub_args(&dir, None, 8);

    let written = cli::build_stub(&args, None).await.expect("build succeeds");
    assert_eq!(written, 3);

    let document = read_catalog(&args.out);
    assert_eq!(document.dim, 8);
    let first = &document.items[0];
    assert_eq!(first.id, "15970");
    assert_eq!(first.title, "Navy Blue Shirt");
    assert_eq!(first.image, "/products/15970.jpg");
    assert_eq!(
        first.description,
        "Men • Apparel • Topwear • Shirts • Navy Blue"
    );
    assert_eq!(first.vec_b64, "EvcyEN6LBKc=");
    assert!((first.price - 53.59).abs() < 1e-9);
    assert_eq!(document.items[2].title, "59263");
}

#[tokio::test]
async fn test_build_stub_limit_precedence() {
    let dir = TempDir::new().expect("temp dir");

    let args = stub_args(&dir, None, 4);
    assert_eq!(cli::build_stub(&args, Some("2")).await.expect("build"), 2);

    let args = stub_args(&dir, Some(1), 4);
    assert_eq!(cli::build_stub(&args, Some("2")).await.expect("build"), 1);
    assert_eq!(read_catalog(&args.out).items.len(), 1);
}

#[tokio::test]
async fn test_build_stub_rejects_zero_dimension() {
    let dir = TempDir::new().expect("temp dir");
    let args = stub_args(&dir, None, 0);
    assert!(cli::build_stub(&args, None).await.is_err());
    assert!(!args.out.exists());
}

#[tokio::test]
async fn test_encode_prints_query_vector() {
    let dir = TempDir::new().expect("temp dir");
    let args = EncodeArgs {
        embedding: write(&dir, "q.json", "[3.0, 4.0]"),
    };
    assert_eq!(cli::encode(&args).await.expect("encodes"), "TGY=");
}

#[tokio::test]
async fn test_encode_reports_unreadable_embedding() {
    let dir = TempDir::new().expect("temp dir");

    let missing = EncodeArgs {
        embedding: dir.path().join("absent.json"),
    };
    assert!(cli::encode(&missing).await.is_err());

    let malformed = EncodeArgs {
        embedding: write(&dir, "bad.json", r#"{"not":"an array"}"#),
    };
    let err = cli::encode(&malformed).await.expect_err("not an embedding");
    assert!(err.to_string().contains("embedding file"));
}

#[tokio::test]
async fn test_search_against_built_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let stub = stub_args(&dir, Some(1), 8);
    cli::build_stub(&stub, None).await.expect("build succeeds");

    let config = ConfigBuilder::new()
        .with_catalog(CatalogConfig {
            path: stub.out.clone(),
            ..CatalogConfig::default()
        })
        .build();
    let args = SearchArgs {
        embedding: write(&dir, "q.json", "[18, -9, 50, 16, -34, -117, 4, -89]"),
        k: Some(5),
    };

    let response = cli::search(config, &args).await.expect("search succeeds");
    assert_eq!(response.matches.len(), 1);
    assert_eq!(response.matches[0].id, "15970");
    assert!(response.matches[0].score > 0);
}

#[tokio::test]
async fn test_search_with_wrong_dimension_fails() {
    let dir = TempDir::new().expect("temp dir");
    let stub = stub_args(&dir, None, 8);
    cli::build_stub(&stub, None).await.expect("build succeeds");

    let config = ConfigBuilder::new()
        .with_catalog(CatalogConfig {
            path: stub.out.clone(),
            ..CatalogConfig::default()
        })
        .build();
    let args = SearchArgs {
        embedding: write(&dir, "q.json", "[1.0, 0.0, 0.0]"),
        k: None,
    };

    assert!(cli::search(config, &args).await.is_err());
}

#[test]
fn test_format_matches_is_tab_separated() {
    let response = SearchResponse {
        matches: vec![SearchMatch {
            id: "1".to_string(),
            image: "/products/1.jpg".to_string(),
            title: "Shirt".to_string(),
            price: 10.0,
            description: String::new(),
            score: 1234,
        }],
    };
    assert_eq!(
        cli::format_matches(&response),
        "/products/1.jpg\tShirt\t1234\n"
    );
    assert_eq!(cli::format_matches(&SearchResponse::default()), "");
}
