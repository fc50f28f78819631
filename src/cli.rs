use clap::Parser;
use std::path::PathBuf;

use crate::scanner::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(
    name = "dirscan",
    version,
    about = "Report disk usage of each item in a directory, largest first"
)]
pub struct Cli {
    /// Directory to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Levels to recurse below each top-level directory
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: u32,

    /// Print sizes in B/KB/MB/GB/TB instead of bytes
    #[arg(short = 'H', long)]
    pub human_readable: bool,

    /// Log parameters, enumerated items and recursion to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a progress bar on stderr while scanning
    #[arg(long)]
    pub progress: bool,
}
