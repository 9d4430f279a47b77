use chrono::{DateTime, Local};
use colored::Colorize;

use crate::{Level, LogEntry};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Turns one log entry into the line written to the log file.
///
/// Implementations must be pure: no I/O, no shared state. Any function with the signature
/// `Fn(Level, &DateTime<Local>, &str, u32, &str) -> String` is a formatter.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry<'_>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(Level, &DateTime<Local>, &str, u32, &str) -> String + Send + Sync,
{
    fn format(&self, entry: &LogEntry<'_>) -> String {
        self(
            entry.level,
            &entry.time,
            entry.filename,
            entry.line,
            entry.message,
        )
    }
}

/// `[2024-05-01 13:37:00]-[INFO] main.rs:42 - message`
pub fn default_format(
    level: Level,
    time: &DateTime<Local>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let time = time.format(TIME_FORMAT);
    format!("[{time}]-[{level}] {file}:{line} - {message}")
}

/// Same layout as [`default_format`] with a colorized level name.
pub fn colored_format(
    level: Level,
    time: &DateTime<Local>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let time = time.format(TIME_FORMAT);
    let name = level.name();
    let level = match level {
        Level::Fatal => name.red().bold(),
        Level::Error => name.red(),
        Level::Warning => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    };
    format!("[{time}]-[{level}] {file}:{line} - {message}")
}

/// One JSON object per line with the fields `time`, `level`, `filename`, `line` and `message`.
pub fn json_format(
    level: Level,
    time: &DateTime<Local>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let entry = LogEntry {
        time: *time,
        level,
        filename: file,
        line,
        message,
    };
    serde_json::to_string(&entry)
        .unwrap_or_else(|_| default_format(level, time, file, line, message))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 13, 37, 5).unwrap()
    }

    #[test]
    fn test_default_format() {
        let line = default_format(Level::Warning, &fixed_time(), "main.rs", 42, "low disk");
        assert_eq!(line, "[2024-05-01 13:37:05]-[WARNING] main.rs:42 - low disk");
    }

    #[test]
    fn test_default_format_contains_name_message_and_timestamp() {
        let timestamp = regex::Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\]").unwrap();
        for level in Level::ALL {
            let line = default_format(level, &Local::now(), "lib.rs", 7, "payload 100%");
            assert!(line.contains(&format!("[{}]", level.name())));
            assert!(line.ends_with("payload 100%"));
            assert!(timestamp.is_match(&line), "{line}");
        }
    }

    #[test]
    fn test_colored_format_keeps_layout() {
        let line = colored_format(Level::Error, &fixed_time(), "main.rs", 1, "boom");
        assert!(line.starts_with("[2024-05-01 13:37:05]-["));
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("] main.rs:1 - boom"));
    }

    #[test]
    fn test_json_format() {
        let line = json_format(Level::Error, &fixed_time(), "main.rs", 12, "say \"hi\"\n");
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], 4);
        assert_eq!(value["filename"], "main.rs");
        assert_eq!(value["line"], 12);
        assert_eq!(value["message"], "say \"hi\"\n");
        assert!(value["time"].as_str().unwrap().starts_with("2024-05-01T13:37:05"));
    }

    #[test]
    fn test_closures_are_formatters() {
        let prefix = String::from(">>");
        let formatter = move |level: Level, _: &DateTime<Local>, _: &str, _: u32, msg: &str| {
            format!("{prefix} {level} {msg}")
        };
        let entry = LogEntry {
            time: fixed_time(),
            level: Level::Debug,
            filename: "a.rs",
            line: 3,
            message: "hello",
        };
        assert_eq!(Formatter::format(&formatter, &entry), ">> DEBUG hello");
    }
}
