use std::path::PathBuf;

use crate::cli::Cli;
use crate::scanner::DEFAULT_MAX_DEPTH;
use crate::util::SizeFormat;

/// Report rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub max_depth: u32,
    pub size_format: SizeFormat,
    pub output: OutputFormat,
    pub verbose: bool,
    pub progress: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: DEFAULT_MAX_DEPTH,
            size_format: SizeFormat::Bytes,
            output: OutputFormat::Text,
            verbose: false,
            progress: false,
        }
    }
}

impl From<Cli> for ScanConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.path,
            max_depth: cli.depth,
            size_format: if cli.human_readable {
                SizeFormat::Human
            } else {
                SizeFormat::Bytes
            },
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbose: cli.verbose,
            progress: cli.progress,
        }
    }
}
