//! Rendering of scan results for the terminal

use anyhow::Result;
use std::io::Write;

use crate::config::{OutputFormat, ScanConfig};
use crate::model::ScanResult;
use crate::util::SizeFormat;

/// Write `result` in the configured output format.
///
/// Entries are sorted largest first before rendering.
pub fn write_report(
    out: &mut impl Write,
    result: &mut ScanResult,
    config: &ScanConfig,
) -> Result<()> {
    result.sort_by_size();
    match config.output {
        OutputFormat::Text => write_text(out, result, config.size_format)?,
        OutputFormat::Json => write_json(out, result)?,
    }
    out.flush()?;
    Ok(())
}

/// Plain text listing: header, item count, one `<path>\t<size>` row per
/// entry, then the total
pub fn write_text(
    out: &mut impl Write,
    result: &ScanResult,
    format: SizeFormat,
) -> std::io::Result<()> {
    writeln!(out, "Scanning directory: {}", result.root().display())?;
    writeln!(out, "Found {} items", result.items_found())?;
    for entry in result.entries() {
        writeln!(out, "{}\t{}", entry.path().display(), format.format(entry.size()))?;
    }
    writeln!(out, "Total size: {}", format.format(result.total()))?;
    Ok(())
}

/// Pretty-printed JSON document with raw byte sizes
pub fn write_json(out: &mut impl Write, result: &ScanResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
