//! Process-wide default logger
//!
//! One lazily-initialized global `Logger` plus package-level convenience
//! functions that delegate to it. Initialization happens exactly once:
//! the first caller of [`init_global_logger`] (or, failing that, the first
//! caller of [`global_logger`], which uses defaults) wins, and every later
//! init call is a no-op. If construction fails, the global degrades to a
//! minimal stderr logger at error level and the failure is reported through
//! that logger itself — this path never returns an error, trading strictness
//! for guaranteed availability of some logger.

use crate::core::{CallSite, Config, LogLevel, Logger, RequestContext};
use once_cell::sync::OnceCell;

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

fn build_or_fallback(config: Config) -> Logger {
    match Logger::new(config) {
        Ok(logger) => logger,
        Err(e) => {
            let fallback = Logger::fallback();
            fallback.error(format!(
                "failed to initialize global logger: {}; falling back to stderr at error level",
                e
            ));
            fallback
        }
    }
}

/// Initialize the global logger from `config`
///
/// Effective only on the first call process-wide; all later calls, with any
/// config, are ignored. Concurrent first calls race to initialize exactly
/// once.
pub fn init_global_logger(config: Config) {
    GLOBAL_LOGGER.get_or_init(|| build_or_fallback(config));
}

/// The global logger, initialized with `Config::default()` if
/// [`init_global_logger`] was never called
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| build_or_fallback(Config::default()))
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    global_logger().log_at(LogLevel::Debug, message, CallSite::capture());
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    global_logger().log_at(LogLevel::Info, message, CallSite::capture());
}

#[track_caller]
pub fn warn(message: impl Into<String>) {
    global_logger().log_at(LogLevel::Warn, message, CallSite::capture());
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    global_logger().log_at(LogLevel::Error, message, CallSite::capture());
}

/// Emit a fatal record on the global logger, then terminate the process
#[track_caller]
pub fn fatal(message: impl Into<String>) -> ! {
    global_logger().fatal_at(message, CallSite::capture())
}

#[track_caller]
pub fn debug_ctx(ctx: &RequestContext, message: impl Into<String>) {
    global_logger().log_ctx_at(LogLevel::Debug, ctx, message, CallSite::capture());
}

#[track_caller]
pub fn info_ctx(ctx: &RequestContext, message: impl Into<String>) {
    global_logger().log_ctx_at(LogLevel::Info, ctx, message, CallSite::capture());
}

#[track_caller]
pub fn warn_ctx(ctx: &RequestContext, message: impl Into<String>) {
    global_logger().log_ctx_at(LogLevel::Warn, ctx, message, CallSite::capture());
}

#[track_caller]
pub fn error_ctx(ctx: &RequestContext, message: impl Into<String>) {
    global_logger().log_ctx_at(LogLevel::Error, ctx, message, CallSite::capture());
}

/// Emit a fatal record with context fields on the global logger, then
/// terminate the process
#[track_caller]
pub fn fatal_ctx(ctx: &RequestContext, message: impl Into<String>) -> ! {
    global_logger().fatal_ctx_at(ctx, message, CallSite::capture())
}
