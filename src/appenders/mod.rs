//! Appender implementations

pub mod console;
pub mod file;
pub mod writer;

pub use console::{ConsoleAppender, ConsoleStream};
pub use file::FileAppender;
pub use writer::WriterAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
