//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Unlike the plain
//! methods, they also capture the enclosing function name, so records carry
//! both `file` and `func` caller fields.
//!
//! # Examples
//!
//! ```
//! use ctxlog::prelude::*;
//! use ctxlog::{info, info_ctx};
//!
//! let logger = Logger::new(Config::default()).expect("stdout logger");
//!
//! // Basic logging with format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Context-aware logging
//! let ctx = RequestContext::new().with_request_id("req-1");
//! info_ctx!(logger, &ctx, "processing {} items", 3);
//! ```

/// Capture the current call site, including the enclosing function name.
///
/// The function name comes from the type name of a local item, which yields
/// the fully qualified path; it is reduced to the bare identifier when
/// rendered.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let __name = __type_name_of(__f);
        $crate::core::caller::CallSite::new(
            file!(),
            line!(),
            Some(__name.strip_suffix("::__f").unwrap_or(__name)),
        )
    }};
}

/// Log a message at an explicit level with automatic formatting.
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::new(Config::default()).expect("stdout logger");
/// use ctxlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format!($($arg)+), $crate::callsite!())
    };
}

/// Log a context-aware message at an explicit level.
///
/// ```
/// # use ctxlog::prelude::*;
/// # let logger = Logger::new(Config::default()).expect("stdout logger");
/// use ctxlog::log_ctx;
/// let ctx = RequestContext::new().with_trace_id("trace-xyz");
/// log_ctx!(logger, LogLevel::Info, &ctx, "step {} done", 1);
/// ```
#[macro_export]
macro_rules! log_ctx {
    ($logger:expr, $level:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.log_ctx_at($level, $ctx, format!($($arg)+), $crate::callsite!())
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at(format!($($arg)+), $crate::callsite!())
    };
}

/// Log a debug-level message with context fields.
#[macro_export]
macro_rules! debug_ctx {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_ctx!($logger, $crate::LogLevel::Debug, $ctx, $($arg)+)
    };
}

/// Log an info-level message with context fields.
#[macro_export]
macro_rules! info_ctx {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_ctx!($logger, $crate::LogLevel::Info, $ctx, $($arg)+)
    };
}

/// Log a warning-level message with context fields.
#[macro_export]
macro_rules! warn_ctx {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_ctx!($logger, $crate::LogLevel::Warn, $ctx, $($arg)+)
    };
}

/// Log an error-level message with context fields.
#[macro_export]
macro_rules! error_ctx {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log_ctx!($logger, $crate::LogLevel::Error, $ctx, $($arg)+)
    };
}

/// Log a fatal-level message with context fields, then terminate the process.
#[macro_export]
macro_rules! fatal_ctx {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.fatal_ctx_at($ctx, format!($($arg)+), $crate::callsite!())
    };
}
