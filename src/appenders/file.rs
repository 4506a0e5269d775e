//! File appender implementation

use crate::core::{Appender, FormatterOptions, LogEntry, LoggerError, OutputFormat, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
    format: OutputFormat,
    options: FormatterOptions,
}

impl FileAppender {
    /// Open `path` for append, creating it if absent
    ///
    /// Fails with [`LoggerError::FileOpen`] when the file cannot be opened;
    /// the caller decides how to handle that.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            format: OutputFormat::default(),
            options: FormatterOptions::default(),
        })
    }

    /// Set the render format and options for this appender
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat, options: FormatterOptions) -> Self {
        self.format = format;
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.format.format(entry, &self.options);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn set_format(&mut self, format: OutputFormat, options: FormatterOptions) {
        self.format = format;
        self.options = options;
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_append_writes_one_line() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.log");

        let mut appender = FileAppender::new(&log_path)?;
        appender.append(&LogEntry::new(LogLevel::Info, "first entry".to_string()))?;
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("first entry"));
        Ok(())
    }

    #[test]
    fn test_open_failure() {
        let result = FileAppender::new("/nonexistent-dir/sub/app.log");
        assert!(matches!(result, Err(LoggerError::FileOpen { .. })));
    }

    #[test]
    fn test_json_lines() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let mut appender = FileAppender::new(&log_path)?
            .with_format(OutputFormat::Json, FormatterOptions::default());
        for i in 0..3 {
            appender.append(&LogEntry::new(LogLevel::Debug, format!("entry {}", i)))?;
        }
        appender.flush()?;

        let content = fs::read_to_string(&log_path)?;
        for line in content.lines() {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["message"].is_string());
        }
        Ok(())
    }
}
