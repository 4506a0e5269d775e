//! Logger configuration
//!
//! `Config` is a value object consumed at logger-construction time. Setter
//! calls on a live logger change only that logger's state, never a `Config`
//! value that was used to build it.

use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use super::timestamp::{FormatterOptions, TimestampFormat};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// Default strftime timestamp format: `2025/01/08 10:30:45.123`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Output destination for a logger without a file path
pub enum OutputTarget {
    Stdout,
    Stderr,
    /// Arbitrary sink, e.g. an in-memory buffer in tests
    Writer(Box<dyn Write + Send>),
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::Stdout
    }
}

impl fmt::Debug for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "Stdout"),
            OutputTarget::Stderr => write!(f, "Stderr"),
            OutputTarget::Writer(_) => write!(f, "Writer(..)"),
        }
    }
}

/// Logger configuration, built defaults-with-overrides
///
/// # Examples
///
/// ```
/// use ctxlog::core::{Config, LogLevel, OutputFormat};
///
/// let config = Config::default()
///     .with_level(LogLevel::Debug)
///     .with_format(OutputFormat::Text)
///     .with_report_caller(false);
/// ```
#[derive(Debug)]
pub struct Config {
    /// Severity threshold
    pub level: LogLevel,
    /// Record rendering format
    pub format: OutputFormat,
    /// Output destination; ignored when `file_path` is set
    pub output: OutputTarget,
    /// When set, the logger appends to this file instead of `output`
    pub file_path: Option<PathBuf>,
    /// Annotate records with caller file/line/function
    pub report_caller: bool,
    /// Timestamp format for rendered records
    pub timestamp_format: TimestampFormat,
    /// Pretty-print JSON records
    pub json_pretty: bool,
}

impl Default for Config {
    /// Default configuration: info level, JSON to stdout, caller reporting on
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: OutputFormat::Json,
            output: OutputTarget::Stdout,
            file_path: None,
            report_caller: true,
            timestamp_format: TimestampFormat::Custom(DEFAULT_TIMESTAMP_FORMAT.to_string()),
            json_pretty: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_report_caller(mut self, report_caller: bool) -> Self {
        self.report_caller = report_caller;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_json_pretty(mut self, pretty: bool) -> Self {
        self.json_pretty = pretty;
        self
    }

    /// Formatter options derived from the current config values
    pub fn formatter_options(&self) -> FormatterOptions {
        FormatterOptions {
            timestamp_format: self.timestamp_format.clone(),
            json_pretty: self.json_pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.file_path.is_none());
        assert!(config.report_caller);
        assert!(!config.json_pretty);
        assert_eq!(
            config.timestamp_format,
            TimestampFormat::Custom(DEFAULT_TIMESTAMP_FORMAT.to_string())
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_level(LogLevel::Error)
            .with_format(OutputFormat::Text)
            .with_file_path("/tmp/app.log")
            .with_report_caller(false)
            .with_json_pretty(true);

        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/app.log")));
        assert!(!config.report_caller);
        assert!(config.json_pretty);
    }

    #[test]
    fn test_formatter_options_follow_config() {
        let config = Config::default()
            .with_timestamp_format(TimestampFormat::Rfc3339)
            .with_json_pretty(true);

        let options = config.formatter_options();
        assert_eq!(options.timestamp_format, TimestampFormat::Rfc3339);
        assert!(options.json_pretty);
    }
}
