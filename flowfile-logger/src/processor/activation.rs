use crate::error::{ConfigurationError, ProcessError};
use crate::flowfile::FlowFile;
use crate::processor::config::ProcessorConfig;
use crate::processor::formatter::format_line;
use crate::processor::ProcessContext;
use crate::session::ProcessSession;
use crate::sink::{LogSink, SinkFactory};
use std::fmt;
use std::sync::Arc;

/// Everything one activation produced: the configuration snapshot and the
/// sink built from its log configuration document.
pub struct Activation {
    config: ProcessorConfig,
    sink: Arc<dyn LogSink>,
}

impl Activation {
    pub fn activate(
        context: &ProcessContext,
        factory: &dyn SinkFactory,
    ) -> Result<Self, ConfigurationError> {
        let config = ProcessorConfig::from_context(context)?;
        let sink = factory.init_sink(&config.log_configuration)?;
        Ok(Self { config, sink })
    }

    pub fn new(config: ProcessorConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    /// Read, format and emit one flowfile.
    pub fn log_flowfile(
        &self,
        session: &mut dyn ProcessSession,
        flowfile: &FlowFile,
    ) -> Result<(), ProcessError> {
        let content = session.read(flowfile)?;
        let line = format_line(&self.config, flowfile.attributes(), &content)?;
        self.sink.emit(line.severity, &line.text)?;
        Ok(())
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
