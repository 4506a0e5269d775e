//! Appender trait for log output destinations
//!
//! This is the facade's seam to the rendering/output engine: an appender owns
//! a sink plus the render settings currently in force, and the facade swaps
//! render settings on it when the formatter is reconfigured.

use super::{
    error::Result, log_entry::LogEntry, output_format::OutputFormat, timestamp::FormatterOptions,
};

pub trait Appender: Send {
    /// Render and write one record
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<()>;

    /// Swap the render format and its options for subsequent records
    fn set_format(&mut self, format: OutputFormat, options: FormatterOptions);

    fn name(&self) -> &str;
}
