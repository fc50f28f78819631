use anyhow::Result;
use clap::Parser;
use std::io;

use dirscan::cli::Cli;
use dirscan::config::ScanConfig;
use dirscan::report::write_report;
use dirscan::scanner::{self, Diagnostics, LogDiagnostics, Scanner};
use dirscan::util::init_logger;

fn main() -> Result<()> {
    let config = ScanConfig::from(Cli::parse());
    init_logger(config.verbose)?;

    let diagnostics = LogDiagnostics::new(config.verbose);
    diagnostics.trace(format_args!(
        "Parameters: path={}, depth={}, size_format={:?}, output={:?}",
        config.root.display(),
        config.max_depth,
        config.size_format,
        config.output
    ));

    let root = scanner::validate_root(&config.root)?;

    let progress = scanner::reporter(config.progress);
    let mut result = Scanner::new(&diagnostics)
        .with_progress(progress.as_ref())
        .scan(&root, config.max_depth)?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &mut result, &config)?;

    Ok(())
}
