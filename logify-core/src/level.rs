use std::{fmt, str::FromStr};

use log::LevelFilter;
use serde::{Serialize, Serializer};

/// Severity of a log entry, ordered from least to most severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Tracing of the least significant events.
    Trace = 0,
    /// Debugging messages.
    Debug = 1,
    /// Informational messages.
    Info = 2,
    /// Warnings.
    Warning = 3,
    /// Errors the program recovers from.
    Error = 4,
    /// Critical errors that terminate the program.
    Fatal = 5,
}

impl Level {
    /// All levels in increasing severity.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Uppercase display name of the level.
    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Numeric rank, 0 for `Trace` up to 5 for `Fatal`.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Closest `log` facade filter. The facade has no fatal rank, so `Fatal` maps to `Error`.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warning => LevelFilter::Warn,
            Level::Error | Level::Fatal => LevelFilter::Error,
        }
    }
}

/// Name of a raw rank, `"UNKNOWN"` when it matches no level.
pub fn level_name(rank: u8) -> &'static str {
    Level::try_from(rank).map_or("UNKNOWN", Level::name)
}

impl TryFrom<u8> for Level {
    type Error = u8;

    fn try_from(rank: u8) -> Result<Self, u8> {
        Level::ALL.get(rank as usize).copied().ok_or(rank)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warning,
            log::Level::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level `{}`", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        match upper.as_str() {
            "WARN" => Ok(Level::Warning),
            name => Level::ALL
                .into_iter()
                .find(|level| level.name() == name)
                .ok_or_else(|| ParseLevelError(s.to_string())),
        }
    }
}

// Levels go on the wire as their rank.
impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}
