use std::{panic::Location, path::Path};

/// Source location of the code that requested a log line.
///
/// Every public logging method is `#[track_caller]`, so [`Caller::resolve`] sees through the
/// library's own wrappers and lands on the user's statement whatever the call depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl Caller<'static> {
    /// Location used when nothing could be resolved.
    pub const UNKNOWN: Self = Self { file: "", line: 0 };

    #[track_caller]
    pub fn resolve() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl<'a> Caller<'a> {
    /// Location carried by a `log` facade record.
    pub fn from_record(record: &log::Record<'a>) -> Self {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => Self { file, line },
            (Some(file), None) => Self { file, line: 0 },
            _ => Self { file: "", line: 0 },
        }
    }

    /// Base name of the source file, directories stripped.
    pub fn file_name(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn wrapper() -> Caller<'static> {
        inner_wrapper()
    }

    #[track_caller]
    fn inner_wrapper() -> Caller<'static> {
        Caller::resolve()
    }

    #[test]
    fn test_resolve_skips_wrappers() {
        let line = line!() + 1;
        let caller = wrapper();
        assert_eq!(caller.line, line);
        assert_eq!(caller.file_name(), "caller.rs");
    }

    #[test]
    fn test_file_name() {
        let caller = Caller {
            file: "src/deep/nested/main.rs",
            line: 3,
        };
        assert_eq!(caller.file_name(), "main.rs");
        assert_eq!(Caller::UNKNOWN.file_name(), "");
    }

    #[test]
    fn test_from_record() {
        let record = log::Record::builder()
            .args(format_args!("hello"))
            .file(Some("src/worker.rs"))
            .line(Some(17))
            .build();
        let caller = Caller::from_record(&record);
        assert_eq!(caller.file_name(), "worker.rs");
        assert_eq!(caller.line, 17);

        let record = log::Record::builder().args(format_args!("hello")).build();
        assert_eq!(Caller::from_record(&record), Caller::UNKNOWN);
    }
}
