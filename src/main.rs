use anyhow::Result;
use clap::Parser;
use resultscan::cli::Cli;
use resultscan::pipeline::{self, ScanOptions};
use resultscan::{detect, logger, output};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let root = detect::resolve_scan_root(cli.path).await?;
    let options = ScanOptions {
        format: cli.format,
        keep_going: cli.keep_going,
        sorted: !cli.unsorted,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = match pipeline::scan(&root, &options, &mut out).await {
        Ok(report) => report,
        Err(e) if output::is_broken_pipe(&e) => return Ok(()),
        Err(e) => return Err(e),
    };

    tracing::debug!(
        processed = report.processed,
        skipped = report.skipped.len(),
        "scan finished"
    );

    if !report.skipped.is_empty() {
        output::write_skipped(&mut std::io::stderr().lock(), &report.skipped)?;
        std::process::exit(1);
    }

    Ok(())
}
