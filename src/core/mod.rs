//! Core facade types and traits

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod request_context;
pub mod timestamp;

pub use appender::Appender;
pub use caller::{CallSite, CALLER_FILE_FIELD, CALLER_FUNC_FIELD};
pub use config::{Config, OutputTarget, DEFAULT_TIMESTAMP_FORMAT};
pub use error::{LoggerError, Result};
pub use fields::{FieldMap, FieldValue};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use output_format::OutputFormat;
pub use request_context::RequestContext;
pub use timestamp::{FormatterOptions, TimestampFormat};
