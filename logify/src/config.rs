use std::{
    fs::DirBuilder,
    path::{Path, PathBuf},
};

use logify_core::{Formatter, Level, LogFile, default_format};

use crate::{
    Logger,
    error::{Error, Result, report},
};

/// Directory used when none is configured.
pub const LOGS_DIR: &str = "logs";
/// File name used when none is configured.
pub const LOGS_FILE: &str = "all.log";

/// Creates `dir` if needed, opens `dir/file_name` in append mode and wraps it in a [`Logger`].
///
/// Failures are reported on stderr and returned; no logger is handed back in that case.
///
/// ```no_run
/// use logify::{Level, default_format};
///
/// let log = logify::init("logs", "all.log", Level::Info, default_format)?;
/// log.info("started");
/// log.close();
/// # Ok::<(), logify::Error>(())
/// ```
pub fn init<D, N, F>(dir: D, file_name: N, level: Level, formatter: F) -> Result<Logger>
where
    D: AsRef<Path>,
    N: AsRef<Path>,
    F: Formatter + 'static,
{
    open_logger(dir.as_ref(), file_name.as_ref(), level, Box::new(formatter))
}

fn open_logger(
    dir: &Path,
    file_name: &Path,
    level: Level,
    formatter: Box<dyn Formatter>,
) -> Result<Logger> {
    let file = create_log_dir(dir)
        .and_then(|()| {
            let path = dir.join(file_name);
            LogFile::open(&path).map_err(|source| Error::OpenFile { path, source })
        })
        .inspect_err(report)?;
    Ok(Logger::with_boxed_formatter(file, level, formatter))
}

fn create_log_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Builder for configuring and initializing a [`Logger`].
pub struct ConfigBuilder {
    dir: PathBuf,
    file_name: PathBuf,
    level: Level,
    formatter: Box<dyn Formatter>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            dir: LOGS_DIR.into(),
            file_name: LOGS_FILE.into(),
            level: Level::Info,
            formatter: Box::new(default_format),
        }
    }
}

impl ConfigBuilder {
    /// Sets the log directory.
    pub fn with_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ..self
        }
    }
    /// Sets the log file name inside the directory.
    pub fn with_file_name<P: AsRef<Path>>(self, file_name: P) -> Self {
        Self {
            file_name: file_name.as_ref().to_path_buf(),
            ..self
        }
    }
    /// Sets the minimum level.
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }
    /// Sets the formatter.
    pub fn with_formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        Self {
            formatter: Box::new(formatter),
            ..self
        }
    }
    /// Creates the directory, opens the file and builds the logger.
    pub fn init(self) -> Result<Logger> {
        let Self {
            dir,
            file_name,
            level,
            formatter,
        } = self;
        open_logger(&dir, &file_name, level, formatter)
    }
}

/// Returns a default ConfigBuilder: `logs/all.log`, [`Level::Info`], [`default_format`].
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
