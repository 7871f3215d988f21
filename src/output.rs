//! CI output sink: `key=value` lines for the workflow runner.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

/// Destination for step outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append to a file such as the one named by `GITHUB_OUTPUT`
    File(PathBuf),
    /// Print to stdout
    Stdout,
}

impl OutputSink {
    /// File sink when a path is configured, stdout otherwise
    pub fn new(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputSink::File(path),
            None => OutputSink::Stdout,
        }
    }

    /// Write a single `key=value` line, creating the file if needed
    pub fn write(&self, key: &str, value: impl ToString) -> Result<()> {
        let line = format_line(key, &value.to_string());
        match self {
            OutputSink::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(line.as_bytes())?;
                tracing::debug!(path = %path.display(), line = line.trim_end(), "wrote output");
            }
            OutputSink::Stdout => print!("{}", line),
        }
        Ok(())
    }
}

pub fn format_line(key: &str, value: &str) -> String {
    format!("{}={}\n", key, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("is-prerelease", "true"), "is-prerelease=true\n");
    }

    #[test]
    fn test_new_picks_sink() {
        assert_eq!(OutputSink::new(None), OutputSink::Stdout);
        assert_eq!(
            OutputSink::new(Some(PathBuf::from("/tmp/out"))),
            OutputSink::File(PathBuf::from("/tmp/out"))
        );
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let sink = OutputSink::File(path.clone());
        sink.write("is-prerelease", true).unwrap();
        sink.write("is-prerelease", false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "existing=1\nis-prerelease=true\nis-prerelease=false\n"
        );
    }

    #[test]
    fn test_file_sink_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh");
        OutputSink::File(path.clone()).write("k", "v").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "k=v\n");
    }

    #[test]
    fn test_file_sink_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out");
        let err = OutputSink::File(path).write("k", "v").unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
