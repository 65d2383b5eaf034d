//! The JSON log configuration document accepted by [`DocumentSinkFactory`].
//!
//! ```json
//! {
//!   "level": "info",
//!   "pattern": "[{d}] [{l}] {m}",
//!   "appenders": [
//!     { "type": "console", "target": "stderr" },
//!     { "type": "file", "path": "/var/log/flow.log", "append": true },
//!     { "type": "syslog", "facility": "local0" }
//!   ]
//! }
//! ```
//!
//! [`DocumentSinkFactory`]: crate::sink::DocumentSinkFactory

use crate::error::ConfigurationError;
use crate::sink::LogSeverity;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PATTERN: &str = "[{d}] [{l}] {m}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SinkDocument {
    /// Lines below this severity are accepted and dropped.
    #[serde(default = "default_level")]
    pub level: LogSeverity,
    /// `{d}` timestamp, `{l}` severity, `{m}` message.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    pub appenders: Vec<AppenderSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AppenderSpec {
    Console {
        #[serde(default)]
        target: ConsoleTarget,
    },
    File {
        path: PathBuf,
        #[serde(default = "default_append")]
        append: bool,
    },
    Syslog {
        #[serde(default = "default_facility")]
        facility: String,
        /// UDP address of a remote syslog server; local unix socket otherwise.
        #[serde(default)]
        remote: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

fn default_level() -> LogSeverity {
    LogSeverity::Info
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_append() -> bool {
    true
}

fn default_facility() -> String {
    "user".to_string()
}

impl SinkDocument {
    pub fn parse(document: &str) -> Result<Self, ConfigurationError> {
        let parsed: SinkDocument = serde_json::from_str(document)
            .map_err(|e| ConfigurationError::InvalidDocument(e.to_string()))?;

        if parsed.appenders.is_empty() {
            return Err(ConfigurationError::InvalidDocument(
                "at least one appender is required".to_string(),
            ));
        }

        Ok(parsed)
    }
}
