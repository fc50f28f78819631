const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// How sizes are rendered in the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFormat {
    /// `<n> bytes`
    #[default]
    Bytes,
    /// Scaled by 1024 with two decimals, e.g. `1.46 KB`
    Human,
}

impl SizeFormat {
    pub fn format(self, bytes: u64) -> String {
        match self {
            SizeFormat::Bytes => format_bytes(bytes),
            SizeFormat::Human => format_size(bytes),
        }
    }
}

/// Format a byte count as an exact integer, e.g. `1500 bytes`
pub fn format_bytes(bytes: u64) -> String {
    format!("{} bytes", bytes)
}

/// Format a byte count as a human-readable string (B, KB, MB, GB, TB)
///
/// Scaling stops once the value drops below 1024 or TB is reached.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    // `>=` so that exactly 1024 of a unit rolls over (1048576 -> "1.00 MB")
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
