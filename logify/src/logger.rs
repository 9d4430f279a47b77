use std::{
    fmt::{self, Display},
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Local;
use log::Log;
use logify_core::{Formatter, Level, LogEntry, LogFile};

use crate::{
    caller::Caller,
    error::{Error, Result, report},
};

/// A leveled logger appending formatted lines to a single file.
///
/// Level and formatter are fixed at construction. The file goes from open to closed exactly once,
/// through [`Logger::close`] or [`Logger::fatal`]. Writes from concurrent callers are serialized by
/// one mutex, so lines never interleave.
///
/// Logging calls never fail or panic: write errors are reported on stderr and the call returns.
/// Use [`Logger::try_log_at`] to observe them instead.
pub struct Logger {
    file: Mutex<Option<LogFile>>,
    level: Level,
    formatter: Box<dyn Formatter>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Wraps an already-open file. Performs no I/O.
    pub fn new<W, F>(file: W, level: Level, formatter: F) -> Self
    where
        W: Into<LogFile>,
        F: Formatter + 'static,
    {
        Self::with_boxed_formatter(file.into(), level, Box::new(formatter))
    }

    pub(crate) fn with_boxed_formatter(
        file: LogFile,
        level: Level,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        Self {
            file: Mutex::new(Some(file)),
            level,
            formatter,
        }
    }

    /// Minimum level written by this logger.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Logs a message at `level`. See the [`log_at!`](crate::log_at) macro for the templated form.
    #[track_caller]
    pub fn log_at(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        if let Err(err) = self.write(level, Caller::resolve(), args) {
            report(&err);
        }
    }

    /// Like [`Logger::log_at`], returning the failure instead of reporting it.
    #[track_caller]
    pub fn try_log_at(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.write(level, Caller::resolve(), args)
    }

    #[track_caller]
    pub fn trace(&self, message: impl Display) {
        self.log_at(Level::Trace, format_args!("{message}"));
    }

    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log_at(Level::Debug, format_args!("{message}"));
    }

    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log_at(Level::Info, format_args!("{message}"));
    }

    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.log_at(Level::Warning, format_args!("{message}"));
    }

    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log_at(Level::Error, format_args!("{message}"));
    }

    /// Logs at [`Level::Fatal`], closes the file and **terminates the process** with status 1.
    ///
    /// This is the only logging call with an effect beyond writing a line. Destructors of the
    /// calling program do not run.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        self.log_at(Level::Fatal, format_args!("{message}"));
        self.close();
        std::process::exit(1)
    }

    /// Flushes and releases the file. Calling it again is a no-op.
    pub fn close(&self) {
        if let Some(mut file) = self.lock().take()
            && let Err(err) = file.flush()
        {
            report(&Error::Write(err));
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut guard = self.lock();
        let file = guard.as_mut().ok_or(Error::Closed)?;
        file.flush()?;
        Ok(())
    }

    pub(crate) fn write(
        &self,
        level: Level,
        caller: Caller<'_>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        // rendered outside the lock so a message that logs while formatting cannot deadlock
        let message = args.to_string();
        let mut guard = self.lock();
        let file = guard.as_mut().ok_or(Error::Closed)?;
        let entry = LogEntry {
            time: Local::now(),
            level,
            filename: caller.file_name(),
            line: caller.line,
            message: &message,
        };
        let line = self.formatter.format(&entry);
        file.write_line(&line)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<LogFile>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        if !self.is_enabled(level) {
            return;
        }
        if let Err(err) = self.write(level, Caller::from_record(record), *record.args()) {
            report(&err);
        }
    }

    fn flush(&self) {
        match Logger::flush(self) {
            Ok(()) | Err(Error::Closed) => {}
            Err(err) => report(&err),
        }
    }
}
