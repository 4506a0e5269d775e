//! Generic writer appender
//!
//! Wraps any `Write + Send` sink. This is what `Logger::set_output` installs
//! when output is switched at runtime, and what tests use to capture records.

use crate::core::{Appender, FormatterOptions, LogEntry, OutputFormat, Result};
use std::io::Write;

pub struct WriterAppender {
    writer: Box<dyn Write + Send>,
    format: OutputFormat,
    options: FormatterOptions,
}

impl WriterAppender {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self::boxed(Box::new(writer))
    }

    pub fn boxed(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer,
            format: OutputFormat::default(),
            options: FormatterOptions::default(),
        }
    }

    /// Set the render format and options for this appender
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat, options: FormatterOptions) -> Self {
        self.format = format;
        self.options = options;
        self
    }
}

impl Appender for WriterAppender {
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
        "writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_appender_captures_lines() -> Result<()> {
        let buf = SharedBuf::default();
        let mut appender = WriterAppender::new(buf.clone());

        appender.append(&LogEntry::new(LogLevel::Info, "captured".to_string()))?;
        appender.flush()?;

        let content = String::from_utf8_lossy(&buf.0.lock()).into_owned();
        assert!(content.contains("captured"));
        assert!(content.ends_with('\n'));
        Ok(())
    }
}
