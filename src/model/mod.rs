mod entry;
mod result;

pub use entry::ScanEntry;
pub use result::ScanResult;
