use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

/// An append-mode log file. Existing content is preserved across reopenings.
#[derive(Debug)]
pub struct LogFile {
    file: File,
}

impl LogFile {
    /// Opens `path` for reading and appending, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let mut options = File::options();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }
        Ok(Self {
            file: options.open(path)?,
        })
    }

    /// Appends `line` and a newline with a single write, so a line is never split.
    pub fn write_line(&mut self, line: &str) -> Result<(), io::Error> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.file.flush()
    }
}

impl From<File> for LogFile {
    fn from(file: File) -> Self {
        Self { file }
    }
}
