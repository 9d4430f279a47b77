//! # logify
//! Leveled logger appending formatted lines to a single file, safe to share between threads.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! logify = "0.1.0"
//! ```
//!
//! ```rust
//! use logify::{Level, default_format};
//!
//! let dir = std::env::temp_dir().join("logify_doc_usage");
//! # std::fs::remove_dir_all(&dir).ok();
//! let log = logify::init(&dir, "all.log", Level::Info, default_format)?;
//! log.info("started");
//! log.warning("low disk");
//! log.debug("below the threshold, not written");
//! log.close();
//!
//! let content = std::fs::read_to_string(dir.join("all.log")).unwrap();
//! assert_eq!(content.lines().count(), 2);
//! assert!(content.ends_with("low disk\n"));
//! # Ok::<(), logify::Error>(())
//! ```
//!
//! Each line records the file and line of the statement that issued the call:
//! `[2024-05-01 13:37:00]-[WARNING] main.rs:7 - low disk`.
//!
//! ## Templated messages
//! The convenience methods take an already rendered message. Use [`log_at!`] to format in place:
//! ```rust
//! # let dir = std::env::temp_dir().join("logify_doc_template");
//! let log = logify::logger_config().with_dir(&dir).init()?;
//! let free = 3;
//! logify::log_at!(log, logify::Level::Warning, "only {free} GB left");
//! log.close();
//! # Ok::<(), logify::Error>(())
//! ```
//!
//! ## Multi-threaded logging
//! ```rust
//! # let dir = std::env::temp_dir().join("logify_doc_threads");
//! let log = logify::logger_config().with_dir(&dir).init()?;
//! std::thread::scope(|s| {
//!     for i in 0..5 {
//!         let log = &log;
//!         s.spawn(move || log.info(format!("Hello, world from thread {i}!")));
//!     }
//! });
//! log.close();
//! # Ok::<(), logify::Error>(())
//! ```
//!
//! ## The `log` facade
//! A logger can be installed process-wide. Dropping the guard uninstalls and closes it.
//! ```rust
//! # let dir = std::env::temp_dir().join("logify_doc_global");
//! let logger = logify::logger_config().with_dir(&dir).init()?;
//! let _guard = logify::init_global(logger)?;
//! log::info!("Hello, world!");
//! # Ok::<(), logify::Error>(())
//! ```
//!
//! ## Fatal
//! [`Logger::fatal`] writes its line, closes the file and exits the process with status 1.

mod caller;
mod config;
mod error;
mod global;
mod logger;

pub use caller::Caller;
pub use config::{ConfigBuilder, LOGS_DIR, LOGS_FILE, init, logger_config};
pub use error::{Error, Result};
pub use global::{LoggerGuard, init_global};
pub use logger::Logger;
pub use logify_core::{
    Formatter, Level, LogEntry, LogFile, ParseLevelError, colored_format, default_format,
    json_format, level_name,
};

/// Logs a formatted message at the given level.
///
/// ```rust
/// # let dir = std::env::temp_dir().join("logify_doc_macro");
/// # let log = logify::logger_config().with_dir(&dir).init()?;
/// let user = "ferris";
/// logify::log_at!(log, logify::Level::Info, "{user} logged in");
/// # Ok::<(), logify::Error>(())
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, ::core::format_args!($($arg)+))
    };
}
