//! Logging for the captioner
//!
//! - Bracketed event format shared by every layer
//! - Dual output: timestamped log file plus stdout

mod formatter;
mod setup;

pub use setup::setup_logging;
