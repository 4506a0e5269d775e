//! # ctxlog
//!
//! A structured-logging facade with request-scoped context propagation,
//! caller-location annotation, and runtime reconfiguration.
//!
//! ## Features
//!
//! - **Request Context**: Immutable, chainable carrier for request/user/trace/span
//!   IDs and arbitrary custom fields, merged into every context-aware record
//! - **Caller Reporting**: Call-site capture via `#[track_caller]` and macros,
//!   emitted as `file://<path>:<line>` and `<fn>()` record fields
//! - **Runtime Reconfiguration**: Level, output sink, and text/JSON format are
//!   switchable on a live logger
//! - **Global Logger**: Lazily-initialized process-wide instance with
//!   package-level convenience functions
//!
//! ## Quick start
//!
//! ```
//! use ctxlog::prelude::*;
//!
//! let logger = Logger::new(Config::default().with_level(LogLevel::Debug))
//!     .expect("stdout logger");
//!
//! let ctx = RequestContext::new()
//!     .with_request_id("req-12345")
//!     .with_custom_field("endpoint", "/api/v1/users");
//!
//! logger.info("server started");
//! logger.info_ctx(&ctx, "request accepted");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{Appender, ConsoleAppender, FileAppender, WriterAppender};
    pub use crate::core::{
        CallSite, Config, FieldMap, FieldValue, FormatterOptions, LogEntry, LogLevel, Logger,
        LoggerError, OutputFormat, OutputTarget, RequestContext, Result, TimestampFormat,
    };
    pub use crate::global::{global_logger, init_global_logger};
}

pub use crate::appenders::{Appender, ConsoleAppender, FileAppender, WriterAppender};
pub use crate::core::{
    CallSite, Config, FieldMap, FieldValue, FormatterOptions, LogEntry, LogLevel, Logger,
    LoggerError, OutputFormat, OutputTarget, RequestContext, Result, TimestampFormat,
};
pub use crate::global::{global_logger, init_global_logger};
