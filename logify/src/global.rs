use std::{
    ops::Deref,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use log::{LevelFilter, Log};

use crate::{
    Logger,
    error::{Error, Result},
};

/// Logger currently installed behind the `log` facade.
static GLOBAL_LOGGER: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Whether the facade was handed to [`GlobalLogger`]. `log` accepts a single registration per process.
static FACADE_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Forwards `log` records to the installed logger, if any.
struct GlobalLogger;

static GLOBAL_FACADE: GlobalLogger = GlobalLogger;

fn installed() -> Option<Arc<Logger>> {
    GLOBAL_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        installed().is_some_and(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &log::Record) {
        if let Some(logger) = installed() {
            logger.log(record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = installed() {
            Log::flush(logger.as_ref());
        }
    }
}

/// Guard that uninstalls and closes the global logger when dropped.
/// Hold this guard for the lifetime of your logging session.
pub struct LoggerGuard {
    logger: Arc<Logger>,
}

impl Deref for LoggerGuard {
    type Target = Logger;
    fn deref(&self) -> &Self::Target {
        &self.logger
    }
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let mut global = GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner);
        if global
            .as_ref()
            .is_some_and(|logger| Arc::ptr_eq(logger, &self.logger))
        {
            *global = None;
            log::set_max_level(LevelFilter::Off);
        }
        drop(global);
        self.logger.close();
    }
}

/// Installs `logger` behind the `log` facade so `log::info!` and friends write to its file.
///
/// The logger stays installed until the returned guard is dropped, which also closes it.
/// Only one logger can be installed at a time.
#[must_use = "LoggerGuard must be kept alive to keep the logger installed. Do \"let _guard = logify::init_global(logger)?;\""]
pub fn init_global(logger: Logger) -> Result<LoggerGuard> {
    let registered = *FACADE_REGISTERED.get_or_init(|| log::set_logger(&GLOBAL_FACADE).is_ok());
    if !registered {
        return Err(Error::FacadeUnavailable);
    }
    let mut global = GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner);
    if global.is_some() {
        return Err(Error::GlobalAlreadyInstalled);
    }
    let logger = Arc::new(logger);
    log::set_max_level(logger.level().to_level_filter());
    *global = Some(Arc::clone(&logger));
    Ok(LoggerGuard { logger })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use logify_core::{Level, LogFile, default_format};

    use super::*;

    fn logger_at(path: &std::path::Path, level: Level) -> Logger {
        Logger::new(LogFile::open(path).unwrap(), level, default_format)
    }

    // The facade is process-wide, so the whole lifecycle runs in one test.
    #[test]
    fn test_global_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        let guard = init_global(logger_at(&first, Level::Info)).unwrap();
        assert!(matches!(
            init_global(logger_at(&second, Level::Info)),
            Err(Error::GlobalAlreadyInstalled)
        ));
        let line = line!() + 1;
        log::info!("Hello, world!");
        log::debug!("filtered");
        guard.warning("through the guard");
        drop(guard);
        log::error!("nobody listening");

        let content = fs::read_to_string(&first).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&format!("[INFO] global.rs:{line} - Hello, world!")));
        assert!(lines[1].ends_with("through the guard"));

        let guard = init_global(logger_at(&second, Level::Trace)).unwrap();
        log::trace!("reinstalled");
        drop(guard);
        assert!(fs::read_to_string(&second).unwrap().ends_with("reinstalled\n"));
    }
}
