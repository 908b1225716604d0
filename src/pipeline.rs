mod parse;
mod read;
mod select;

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::Format;
use crate::extract::summary::FileSummary;
use crate::output;

use parse::summarize;
use select::select_result_files;

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub format: Format,
    pub keep_going: bool,
    pub sorted: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            format: Format::default(),
            keep_going: false,
            sorted: true,
        }
    }
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(normalize_path)
        .unwrap_or_else(|_| normalize_path(path))
}

pub async fn scan<W: Write>(
    root: &Path,
    options: &ScanOptions,
    out: &mut W,
) -> Result<ScanReport> {
    let files = select_result_files(root, options.sorted).await?;
    let mut report = ScanReport::default();

    for path in files {
        let summary = match process_file(&path).await {
            Ok(summary) => summary,
            Err(e) if options.keep_going => {
                tracing::warn!(path = %path.display(), "skipping unreadable file: {:#}", e);
                report.skipped.push(SkippedFile {
                    path,
                    reason: format!("{:#}", e),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let shown = display_path(&path, root);
        tracing::debug!(
            path = %shown,
            functions = summary.functions.len(),
            callees = summary.callees.len(),
            has_loop = summary.has_loop,
            "summarized"
        );

        output::write_record(out, &shown, &summary, options.format)?;
        out.flush()?;
        report.processed += 1;
    }

    Ok(report)
}

pub async fn process_file(path: &Path) -> Result<FileSummary> {
    let content = read::read_file(path).await?;
    Ok(summarize(&content))
}
