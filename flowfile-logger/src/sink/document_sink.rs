use crate::error::{ConfigurationError, SinkEmitError};
use crate::sink::appender::{build_appender, Appender, Layout};
use crate::sink::document::SinkDocument;
use crate::sink::{LogSeverity, LogSink, SinkFactory};
use std::sync::Arc;

/// Sink built from a [`SinkDocument`]: a severity threshold in front of one or
/// more appenders.
pub struct DocumentSink {
    level: LogSeverity,
    appenders: Vec<Box<dyn Appender>>,
}

impl DocumentSink {
    pub fn from_document(document: &SinkDocument) -> Result<Self, ConfigurationError> {
        let layout = Layout::new(&document.pattern);
        let appenders = document
            .appenders
            .iter()
            .map(|spec| build_appender(spec, &layout))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            level: document.level,
            appenders,
        })
    }

    pub fn level(&self) -> LogSeverity {
        self.level
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.appenders.iter().map(|a| a.name()).collect()
    }
}

impl LogSink for DocumentSink {
    fn emit(&self, severity: LogSeverity, message: &str) -> Result<(), SinkEmitError> {
        if severity < self.level {
            return Ok(());
        }

        // Every appender gets the line; the first failure is reported.
        let mut first_error = None;
        for appender in &self.appenders {
            if let Err(reason) = appender.append(severity, message) {
                first_error.get_or_insert(SinkEmitError {
                    appender: appender.name(),
                    reason,
                });
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn flush(&self) {
        for appender in &self.appenders {
            if let Err(e) = appender.flush() {
                log::warn!("Failed to flush {} appender: {e}", appender.name());
            }
        }
    }
}

/// Default [`SinkFactory`]: parses the JSON log configuration document and
/// opens every appender it declares.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSinkFactory;

impl SinkFactory for DocumentSinkFactory {
    fn init_sink(&self, document: &str) -> Result<Arc<dyn LogSink>, ConfigurationError> {
        let parsed = SinkDocument::parse(document)?;
        let sink = DocumentSink::from_document(&parsed)?;
        log::debug!(
            "Initialized log sink with appenders {:?} at level {}",
            sink.appender_names(),
            sink.level()
        );
        Ok(Arc::new(sink))
    }
}
