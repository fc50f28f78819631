mod format;
mod logging;

pub use format::{format_bytes, format_size, SizeFormat};
pub use logging::init_logger;
