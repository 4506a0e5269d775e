//! Console appender implementation

use crate::core::{Appender, FormatterOptions, LogEntry, LogLevel, OutputFormat, Result};
use colored::Colorize;

/// Which standard stream the appender writes to by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    stream: ConsoleStream,
    use_colors: bool,
    format: OutputFormat,
    options: FormatterOptions,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
            use_colors: true,
            format: OutputFormat::default(),
            options: FormatterOptions::default(),
        }
    }

    /// Appender that writes every record to stderr
    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
            use_colors: true,
            format: OutputFormat::default(),
            options: FormatterOptions::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the render format and options for this appender
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat, options: FormatterOptions) -> Self {
        self.format = format;
        self.options = options;
        self
    }

    /// Format as text with optional level colors
    fn format_text(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            format!("{:5}", entry.level.to_str())
                .color(entry.level.color_code())
                .to_string()
        } else {
            format!("{:5}", entry.level.to_str())
        };

        let timestamp_str = self.options.timestamp_format.format(&entry.timestamp);

        let base = format!(
            "[{}] [{}] {} - {}",
            timestamp_str,
            level_str,
            entry.thread_name.as_ref().unwrap_or(&entry.thread_id),
            entry.message
        );

        if entry.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, entry.fields.format_fields())
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = match self.format {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json => self.format.format(entry, &self.options),
        };

        // Error and Fatal always go to stderr
        match (self.stream, entry.level) {
            (ConsoleStream::Stderr, _) | (_, LogLevel::Error | LogLevel::Fatal) => {
                eprintln!("{}", output)
            }
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since errors are routed to stderr
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn set_format(&mut self, format: OutputFormat, options: FormatterOptions) {
        self.format = format;
        self.options = options;
    }

    fn name(&self) -> &str {
        "console"
    }
}
