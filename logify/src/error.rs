use std::{io, path::PathBuf};

use colored::Colorize;
use thiserror::Error;

/// The result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// An error that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The log directory could not be created.
    #[error("unable to create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened.
    #[error("unable to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a log line failed.
    #[error("unable to write log entry: {0}")]
    Write(#[from] io::Error),

    /// The logger was closed.
    #[error("logger is closed")]
    Closed,

    /// A logify logger is already installed behind the `log` facade.
    #[error("a global logger is already installed")]
    GlobalAlreadyInstalled,

    /// Another `log` implementation owns the facade.
    #[error("the log facade is already owned by another logger")]
    FacadeUnavailable,
}

/// Reports an error that is not propagated to the caller.
pub(crate) fn report(err: &Error) {
    eprintln!("{} {err}", "logify:".red().bold());
}
