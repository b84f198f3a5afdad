//! Input text loading.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use tokio::io::AsyncReadExt;

/// Reads the whole message text from a file, or from stdin when `path` is `-`.
pub async fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        info!("Reading text from stdin");
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))
}
