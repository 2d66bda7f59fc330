//! Offline commands
//!
//! `search` and `encode` take an embedding file holding a JSON array of
//! floats, as written by the feature extractor. `build-stub` turns a
//! products JSONL file into a catalog document with id-seeded vectors.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use qvs_application::ports::SearchServiceInterface;
use qvs_domain::{Embedding, KParam, SearchResponse, codec};
use qvs_infrastructure::config::{AppConfig, ConfigLoader};
use qvs_infrastructure::di::init_app;
use qvs_infrastructure::utils::FileUtils;
use qvs_providers::catalog::{ProductRecord, StubCatalogBuilder, resolve_limit};

/// Environment variable capping the stub catalog size
pub const MAX_ITEMS_ENV: &str = "MAX_ITEMS";

/// Command line interface for Quantized Visual Search
#[derive(Parser, Debug)]
#[command(name = "qvs")]
#[command(about = "Quantized Visual Search - image similarity over int8 embeddings")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the vector search API over HTTP
    Serve,
    /// Rank the configured catalog against an embedding
    Search(SearchArgs),
    /// Print the base64 query vector for an embedding
    Encode(EncodeArgs),
    /// Build a stub catalog from a products JSONL file
    BuildStub(BuildStubArgs),
}

/// Arguments for `qvs search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// JSON file holding the query embedding
    #[arg(long)]
    pub embedding: PathBuf,

    /// Number of matches to return
    #[arg(long)]
    pub k: Option<i64>,
}

/// Arguments for `qvs encode`
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON file holding the embedding
    #[arg(long)]
    pub embedding: PathBuf,
}

/// Arguments for `qvs build-stub`
#[derive(Args, Debug)]
pub struct BuildStubArgs {
    /// Products JSONL file
    #[arg(long)]
    pub products: PathBuf,

    /// Catalog JSON file to write
    #[arg(long)]
    pub out: PathBuf,

    /// Maximum number of products to include
    #[arg(long)]
    pub limit: Option<usize>,

    /// Vector dimension
    #[arg(long, default_value_t = StubCatalogBuilder::default().dimension())]
    pub dim: usize,
}

/// Load configuration from an optional explicit path
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

async fn read_embedding(path: &Path) -> anyhow::Result<Embedding> {
    Ok(FileUtils::read_json(path, "embedding file").await?)
}

/// Search the configured catalog with the embedding in `args.embedding`
pub async fn search(config: AppConfig, args: &SearchArgs) -> anyhow::Result<SearchResponse> {
    let embedding = read_embedding(&args.embedding).await?;
    let k = args.k.map_or(KParam::Absent, KParam::Number);
    let context = init_app(config)?;
    context
        .search_service()
        .search_embedding(&embedding, k)
        .await
        .context("search failed")
}

/// One `image<TAB>title<TAB>score` line per match
pub fn format_matches(response: &SearchResponse) -> String {
    response
        .matches
        .iter()
        .map(|m| format!("{}\t{}\t{}\n", m.image, m.title, m.score))
        .collect()
}

/// Base64 query vector for the embedding in `args.embedding`
pub async fn encode(args: &EncodeArgs) -> anyhow::Result<String> {
    let embedding = read_embedding(&args.embedding).await?;
    let quantized = codec::quantize_embedding(&embedding.vector)?;
    Ok(codec::encode(&quantized))
}

/// Write a stub catalog and return the number of items written
///
/// `max_items` is the raw `MAX_ITEMS` value, consulted when no `--limit`
/// was given.
pub async fn build_stub(args: &BuildStubArgs, max_items: Option<&str>) -> anyhow::Result<usize> {
    anyhow::ensure!(args.dim >= 1, "--dim must be at least 1");

    let text = FileUtils::read_text(&args.products, "products file").await?;
    let available = text.lines().filter(|line| !line.trim().is_empty()).count();
    let limit = resolve_limit(args.limit, max_items, available);
    let products = ProductRecord::parse_lines(&text, limit)?;

    let document = StubCatalogBuilder::new(args.dim).build(&products);
    FileUtils::write_json(&args.out, &document, "stub catalog").await?;
    Ok(document.items.len())
}
