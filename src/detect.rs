use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tokio::fs;

pub async fn resolve_scan_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let start = match path {
        Some(p) => {
            if p.is_absolute() {
                p
            } else {
                std::env::current_dir()?.join(p)
            }
        }
        None => std::env::current_dir()?,
    };

    let root = fs::canonicalize(&start)
        .await
        .with_context(|| format!("Failed to canonicalize path: {}", start.display()))?;

    let metadata = fs::metadata(&root)
        .await
        .with_context(|| format!("Failed to stat {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = resolve_scan_root(Some(dir.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(root, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[tokio::test]
    async fn rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_scan_root(Some(dir.path().join("missing")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.result");
        std::fs::write(&file, "").unwrap();

        let err = resolve_scan_root(Some(file)).await.unwrap_err();
        assert!(err.to_string().starts_with("Not a directory"));
    }
}
