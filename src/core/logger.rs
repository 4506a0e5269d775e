//! Logger facade
//!
//! Wraps a rendering appender behind leveled and context-aware logging
//! methods, merges request-context fields into each record, annotates caller
//! locations, and supports runtime reconfiguration of level, output, and
//! format. A single mutex serializes reconfiguration; a record racing a
//! setter is emitted under either the old or new settings (last write wins).

use super::{
    appender::Appender,
    caller::CallSite,
    config::{Config, OutputTarget},
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    output_format::OutputFormat,
    request_context::RequestContext,
    timestamp::FormatterOptions,
};
use crate::appenders::{ConsoleAppender, FileAppender, WriterAppender};
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

struct LoggerInner {
    min_level: LogLevel,
    format: OutputFormat,
    options: FormatterOptions,
    report_caller: bool,
    file_path: Option<PathBuf>,
    appender: Box<dyn Appender>,
}

/// A logger instance: one appender handle, one config snapshot, one guard
///
/// Cloning shares the same underlying instance, so a logger can be handed to
/// any number of threads; reconfiguration through any clone is visible to all.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Mutex<LoggerInner>>,
}

impl Logger {
    /// Construct a logger from `config`
    ///
    /// When `file_path` is set, the file is opened for append
    /// (create-if-absent) and construction fails on an open error — there is
    /// no silent fallback at this layer.
    pub fn new(config: Config) -> Result<Self> {
        let Config {
            level,
            format,
            output,
            file_path,
            report_caller,
            timestamp_format,
            json_pretty,
        } = config;
        let options = FormatterOptions {
            timestamp_format,
            json_pretty,
        };

        let appender: Box<dyn Appender> = if let Some(ref path) = file_path {
            Box::new(FileAppender::new(path.clone())?.with_format(format, options.clone()))
        } else {
            match output {
                OutputTarget::Stdout => {
                    Box::new(ConsoleAppender::new().with_format(format, options.clone()))
                }
                OutputTarget::Stderr => {
                    Box::new(ConsoleAppender::stderr().with_format(format, options.clone()))
                }
                OutputTarget::Writer(writer) => {
                    Box::new(WriterAppender::boxed(writer).with_format(format, options.clone()))
                }
            }
        };

        Ok(Self {
            inner: Arc::new(Mutex::new(LoggerInner {
                min_level: level,
                format,
                options,
                report_caller,
                file_path,
                appender,
            })),
        })
    }

    /// Minimal logger used when global initialization fails: plain text to
    /// stderr at error level, no caller reporting. Cannot itself fail.
    pub(crate) fn fallback() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoggerInner {
                min_level: LogLevel::Error,
                format: OutputFormat::Text,
                options: FormatterOptions::default(),
                report_caller: false,
                file_path: None,
                appender: Box::new(
                    ConsoleAppender::stderr()
                        .with_format(OutputFormat::Text, FormatterOptions::default()),
                ),
            })),
        }
    }

    /// Current severity threshold
    pub fn level(&self) -> LogLevel {
        self.inner.lock().min_level
    }

    /// Current rendering format
    pub fn format(&self) -> OutputFormat {
        self.inner.lock().format
    }

    /// Configured file path, if file output is active
    pub fn file_path(&self) -> Option<PathBuf> {
        self.inner.lock().file_path.clone()
    }

    /// Update the severity threshold
    ///
    /// Subsequent calls below the threshold are suppressed; records already
    /// emitted are unaffected.
    pub fn set_level(&self, level: LogLevel) {
        self.inner.lock().min_level = level;
    }

    /// Swap the output destination
    ///
    /// Clears any file-path association: a manual output switch supersedes
    /// file-based output. The current format and options carry over.
    pub fn set_output(&self, writer: impl Write + Send + 'static) {
        let mut inner = self.inner.lock();
        let format = inner.format;
        let options = inner.options.clone();
        inner.appender = Box::new(WriterAppender::new(writer).with_format(format, options));
        inner.file_path = None;
    }

    /// Swap between text and JSON rendering
    ///
    /// Formatter options (timestamp format, pretty-print) are re-derived from
    /// the logger's current config state. Only subsequent records are
    /// affected.
    pub fn set_formatter(&self, format: OutputFormat) {
        let mut inner = self.inner.lock();
        inner.format = format;
        let options = inner.options.clone();
        inner.appender.set_format(format, options);
    }

    /// Flush the active appender
    pub fn flush(&self) -> Result<()> {
        self.inner.lock().appender.flush()
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Debug, message, CallSite::capture());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Info, message, CallSite::capture());
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Warn, message, CallSite::capture());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Error, message, CallSite::capture());
    }

    /// Emit a fatal record, then terminate the process
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.fatal_at(message, CallSite::capture())
    }

    #[track_caller]
    pub fn debug_ctx(&self, ctx: &RequestContext, message: impl Into<String>) {
        self.log_ctx_at(LogLevel::Debug, ctx, message, CallSite::capture());
    }

    #[track_caller]
    pub fn info_ctx(&self, ctx: &RequestContext, message: impl Into<String>) {
        self.log_ctx_at(LogLevel::Info, ctx, message, CallSite::capture());
    }

    #[track_caller]
    pub fn warn_ctx(&self, ctx: &RequestContext, message: impl Into<String>) {
        self.log_ctx_at(LogLevel::Warn, ctx, message, CallSite::capture());
    }

    #[track_caller]
    pub fn error_ctx(&self, ctx: &RequestContext, message: impl Into<String>) {
        self.log_ctx_at(LogLevel::Error, ctx, message, CallSite::capture());
    }

    /// Emit a fatal record with context fields, then terminate the process
    #[track_caller]
    pub fn fatal_ctx(&self, ctx: &RequestContext, message: impl Into<String>) -> ! {
        self.fatal_ctx_at(ctx, message, CallSite::capture())
    }

    /// Emit a record at `level` with an explicit call site
    ///
    /// This is the entry point the logging macros use; the convenience
    /// methods above capture the site themselves.
    pub fn log_at(&self, level: LogLevel, message: impl Into<String>, site: CallSite) {
        self.emit(level, message.into(), None, site);
    }

    /// Emit a record at `level` with context fields and an explicit call site
    pub fn log_ctx_at(
        &self,
        level: LogLevel,
        ctx: &RequestContext,
        message: impl Into<String>,
        site: CallSite,
    ) {
        self.emit(level, message.into(), Some(ctx), site);
    }

    /// Macro entry point for fatal records
    pub fn fatal_at(&self, message: impl Into<String>, site: CallSite) -> ! {
        self.emit(LogLevel::Fatal, message.into(), None, site);
        std::process::exit(1);
    }

    /// Macro entry point for fatal records with context fields
    pub fn fatal_ctx_at(
        &self,
        ctx: &RequestContext,
        message: impl Into<String>,
        site: CallSite,
    ) -> ! {
        self.emit(LogLevel::Fatal, message.into(), Some(ctx), site);
        std::process::exit(1);
    }

    fn emit(&self, level: LogLevel, message: String, ctx: Option<&RequestContext>, site: CallSite) {
        let mut inner = self.inner.lock();
        if level < inner.min_level {
            return;
        }

        let mut entry = LogEntry::new(level, message);
        if let Some(ctx) = ctx {
            ctx.merge_into(&mut entry.fields);
        }
        if inner.report_caller {
            site.annotate(&mut entry.fields);
        }

        let result = inner
            .appender
            .append(&entry)
            .and_then(|()| inner.appender.flush());
        if let Err(e) = result {
            // A broken sink must not take the caller down with it
            eprintln!(
                "[LOGGER ERROR] appender '{}' failed: {}",
                inner.appender.name(),
                e
            );
        }
    }
}
