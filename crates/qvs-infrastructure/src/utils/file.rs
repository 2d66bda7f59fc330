//! Async file I/O utilities
//!
//! JSON and text helpers with consistent error messages.

use crate::error_ext::ErrorContext;
use qvs_domain::error::{Error, Result};
use std::path::Path;

/// Async file utilities for common I/O patterns
pub struct FileUtils;

impl FileUtils {
    /// Read a whole text file
    ///
    /// # Arguments
    /// * `path` - The file path to read from
    /// * `context` - Description for error messages (e.g., "products file")
    pub async fn read_text<P: AsRef<Path>>(path: P, context: &str) -> Result<String> {
        tokio::fs::read_to_string(path.as_ref())
            .await
            .io_context(format!("Failed to read {context} {}", path.as_ref().display()))
    }

    /// Read JSON from file
    ///
    /// # Arguments
    /// * `path` - The file path to read from
    /// * `context` - Description for error messages (e.g., "embedding file")
    pub async fn read_json<T: serde::de::DeserializeOwned, P: AsRef<Path>>(
        path: P,
        context: &str,
    ) -> Result<T> {
        let content = Self::read_text(path.as_ref(), context).await?;
        serde_json::from_str(&content).map_err(|e| {
            Error::invalid_input(format!(
                "Failed to parse {context} {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Serialize compact JSON and write it, creating parent directories
    pub async fn write_json<T: serde::Serialize, P: AsRef<Path>>(
        path: P,
        value: &T,
        context: &str,
    ) -> Result<()> {
        let content =
            serde_json::to_vec(value).context(format!("Failed to serialize {context}"))?;
        Self::ensure_dir_write(path, &content, context).await
    }

    /// Ensure directory exists and write file
    ///
    /// # Arguments
    /// * `path` - The file path to write to
    /// * `content` - The content bytes to write
    /// * `context` - Description for error messages
    pub async fn ensure_dir_write<P: AsRef<Path>>(
        path: P,
        content: &[u8],
        context: &str,
    ) -> Result<()> {
        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .io_context(format!("Failed to create directory for {context}"))?;
        }

        tokio::fs::write(path.as_ref(), content)
            .await
            .io_context(format!("Failed to write {context}"))
    }
}
