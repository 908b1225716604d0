use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "resultscan",
    version,
    about = "Summarize functions, callees and loop markers across *.result files"
)]
pub struct Cli {
    #[arg(help = "Directory holding the *.result files (default: cwd)")]
    pub path: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        default_value = "text",
        help = "Record format (text, json)"
    )]
    pub format: Format,

    #[arg(long, help = "Skip files that cannot be read instead of aborting")]
    pub keep_going: bool,

    #[arg(long, help = "Emit files in directory-listing order instead of by name")]
    pub unsorted: bool,

    #[arg(long, short, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
