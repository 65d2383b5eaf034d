//! Error types raised by activation and by per-flowfile processing.
//!
//! Activation errors ([`ConfigurationError`]) are fatal and returned to the
//! host. Per-flowfile faults ([`ProcessError`]) never escape `on_trigger`;
//! they are logged and turn into a FAILURE routing decision.

use std::io;
use thiserror::Error;

/// Raised while (re)activating the processor.
///
/// The processor does not accept flowfiles until a later activation succeeds.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("required property '{name}' is not set")]
    MissingProperty { name: String },

    #[error("property '{name}' must not be empty")]
    EmptyProperty { name: String },

    #[error("property '{name}' has value '{value}', expected one of: {allowed}")]
    InvalidPropertyValue {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("invalid log configuration document: {0}")]
    InvalidDocument(String),

    #[error("failed to initialize {appender} appender: {reason}")]
    AppenderInit { appender: String, reason: String },
}

/// Flowfile content could not be decoded as UTF-8.
#[derive(Debug, Error)]
#[error("flowfile content is not valid UTF-8: {0}")]
pub struct DecodeError(#[from] std::str::Utf8Error);

/// The log sink rejected a formatted line.
#[derive(Debug, Error)]
#[error("failed to emit log line to {appender} appender: {reason}")]
pub struct SinkEmitError {
    pub appender: String,
    pub reason: String,
}

/// Any fault that routes a single flowfile to FAILURE.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read flowfile content: {0}")]
    Read(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Emit(#[from] SinkEmitError),
}

/// Returned by `on_trigger` when the host misuses the processor lifecycle.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("processor '{0}' was triggered without an active configuration")]
    NotScheduled(String),
}
