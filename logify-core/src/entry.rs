use chrono::{DateTime, Local};
use serde::Serialize;

use crate::Level;

/// A single log call, built right before formatting and never retained.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    /// Base name of the calling source file, empty when unresolved.
    pub filename: &'a str,
    /// Line of the call site, 0 when unresolved.
    pub line: u32,
    pub message: &'a str,
}
