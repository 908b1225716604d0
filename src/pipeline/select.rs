use anyhow::{Context, Result};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use std::path::{Path, PathBuf};

pub const RESULT_GLOB: &str = "*.result";
pub const RESULT_SUFFIX: &str = ".result";

pub async fn select_result_files(root: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let root = root.to_path_buf();

    tokio::task::spawn_blocking(move || select_result_files_sync(&root, sorted)).await?
}

fn select_result_files_sync(root: &Path, sorted: bool) -> Result<Vec<PathBuf>> {
    let overrides = OverrideBuilder::new(root)
        .add(RESULT_GLOB)?
        .build()
        .context("Failed to build result file glob")?;

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .max_depth(Some(1))
        .overrides(overrides);

    if sorted {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry =
            entry.with_context(|| format!("Failed to list directory: {}", root.display()))?;

        let path = entry.path();
        if entry.file_type().is_none_or(|t| t.is_dir()) || path.is_dir() {
            continue;
        }

        let matches_suffix = path
            .file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(RESULT_SUFFIX.as_bytes()));

        if matches_suffix {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(count = files.len(), root = %root.display(), "selected result files");

    Ok(files)
}
