use anyhow::{Context, Result};
use std::path::Path;

const MMAP_THRESHOLD: u64 = 64 * 1024;

pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let content = if metadata.len() > MMAP_THRESHOLD {
        let owned = path.to_path_buf();
        tokio::task::spawn_blocking(move || map_whole_file(&owned)).await?
    } else {
        tokio::fs::read(path).await.map_err(Into::into)
    };

    content.with_context(|| format!("Failed to read {}", path.display()))
}

fn map_whole_file(path: &Path) -> Result<Vec<u8>> {
    let file = std::fs::File::open(path)?;
    // the handle and the mapping are dropped before returning
    let mapped = unsafe { memmap2::Mmap::map(&file)? };
    Ok(mapped.to_vec())
}
