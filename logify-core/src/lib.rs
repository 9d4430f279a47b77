//! # logify-core
//! Core types for logify - levels, log entries, formatters and the append-mode log file.

mod entry;
mod format;
mod level;
mod log_writer;

pub use entry::LogEntry;
pub use format::{Formatter, colored_format, default_format, json_format};
pub use level::{Level, ParseLevelError, level_name};
pub use log_writer::LogFile;
