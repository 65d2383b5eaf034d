//! Log sinks: where formatted lines go.
//!
//! A sink is built once per activation from the processor's log configuration
//! document by a [`SinkFactory`] and then handed to every invocation. Nothing
//! here goes through the global `log` facade; the processor's own diagnostics
//! do, the flowfile lines do not.
//!
//! # Example
//!
//! ```
//! use flowfile_logger::sink::{DocumentSinkFactory, LogSeverity, SinkFactory};
//!
//! let sink = DocumentSinkFactory
//!     .init_sink(r#"{"appenders":[{"type":"console","target":"stderr"}]}"#)
//!     .expect("valid document");
//! sink.emit(LogSeverity::Info, "[orders] flowfile-content: hello ")
//!     .expect("console accepts the line");
//! ```

mod appender;
mod document;
mod document_sink;
mod log_severity;

use crate::error::{ConfigurationError, SinkEmitError};
use std::sync::Arc;

pub use document::{AppenderSpec, ConsoleTarget, SinkDocument, DEFAULT_PATTERN};
pub use document_sink::{DocumentSink, DocumentSinkFactory};
pub use log_severity::LogSeverity;

/// Accepts `(severity, line)` pairs.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    fn emit(&self, severity: LogSeverity, message: &str) -> Result<(), SinkEmitError>;

    /// Push buffered lines out. Called when the sink is retired.
    fn flush(&self) {}
}

/// Builds a sink from a log configuration document.
#[cfg_attr(test, mockall::automock)]
pub trait SinkFactory: Send + Sync {
    fn init_sink(&self, document: &str) -> Result<Arc<dyn LogSink>, ConfigurationError>;
}
