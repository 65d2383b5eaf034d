use crate::error::{ConfigurationError, TriggerError};
use crate::processor::activation::Activation;
use crate::processor::config::PROPERTY_DESCRIPTORS;
use crate::processor::router::route;
use crate::processor::{
    InputRequirement, ProcessContext, Processor, PropertyDescriptor, Relationship,
};
use crate::session::ProcessSession;
use crate::sink::{DocumentSinkFactory, SinkFactory};
use std::sync::{Arc, RwLock};

const PROCESSOR_NAME: &str = "FlowFileLogger";
const DESCRIPTION: &str =
    "Logs flowfile content and/or attributes through a configurable log sink \
     with customizable log levels and prefixes.";
const TAGS: [&str; 3] = ["logger", "logging", "flowfile"];

/// Formats each incoming flowfile into a log line, writes it to the sink
/// described by the `logConfiguration` property and routes the flowfile to
/// SUCCESS, or to FAILURE when reading, decoding or emitting fails.
///
/// The active configuration is an immutable [`Activation`] snapshot.
/// `on_scheduled` swaps in a new one; each trigger clones the `Arc` once, so
/// it sees either the old or the new snapshot in full.
pub struct LogProcessor {
    factory: Box<dyn SinkFactory>,
    active: RwLock<Option<Arc<Activation>>>,
}

impl LogProcessor {
    pub fn new() -> Self {
        Self::with_sink_factory(DocumentSinkFactory)
    }

    pub fn with_sink_factory<F: SinkFactory + 'static>(factory: F) -> Self {
        Self {
            factory: Box::new(factory),
            active: RwLock::new(None),
        }
    }

    /// Current snapshot, if the processor is scheduled.
    pub fn activation(&self) -> Option<Arc<Activation>> {
        match self.active.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace_activation(&self, next: Option<Arc<Activation>>) -> Option<Arc<Activation>> {
        let mut guard = match self.active.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }

    fn retire(previous: Option<Arc<Activation>>) {
        if let Some(previous) = previous {
            previous.sink().flush();
        }
    }
}

impl Default for LogProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for LogProcessor {
    fn name(&self) -> String {
        PROCESSOR_NAME.to_string()
    }

    fn description(&self) -> String {
        DESCRIPTION.to_string()
    }

    fn tags(&self) -> Vec<String> {
        TAGS.iter().map(|t| t.to_string()).collect()
    }

    fn property_descriptors(&self) -> Vec<PropertyDescriptor> {
        PROPERTY_DESCRIPTORS.to_vec()
    }

    fn relationships(&self) -> Vec<Relationship> {
        vec![Relationship::Success, Relationship::Failure]
    }

    fn input_requirement(&self) -> InputRequirement {
        InputRequirement::Allowed
    }

    fn supports_batching(&self) -> bool {
        true
    }

    fn on_scheduled(&self, context: &ProcessContext) -> Result<(), ConfigurationError> {
        for key in context.unknown_properties(&PROPERTY_DESCRIPTORS) {
            log::warn!("{PROCESSOR_NAME} ignores unsupported property '{key}'");
        }

        match Activation::activate(context, self.factory.as_ref()) {
            Ok(activation) => {
                log::info!(
                    "{PROCESSOR_NAME} scheduled: source={}, type={}, prefix={:?}",
                    activation.config().data_source,
                    activation.config().severity,
                    activation.config().prefix
                );
                Self::retire(self.replace_activation(Some(Arc::new(activation))));
                Ok(())
            }
            Err(e) => {
                log::error!("{PROCESSOR_NAME} failed to schedule: {e}");
                Self::retire(self.replace_activation(None));
                Err(e)
            }
        }
    }

    fn on_trigger(
        &self,
        session: &mut dyn ProcessSession,
    ) -> Result<Option<Relationship>, TriggerError> {
        let Some(activation) = self.activation() else {
            return Err(TriggerError::NotScheduled(self.name()));
        };

        let Some(flowfile) = session.get() else {
            return Ok(None);
        };

        let outcome = activation.log_flowfile(session, &flowfile);
        if let Err(e) = &outcome {
            log::error!("Failed to process {flowfile} data due to {e}; transferring to failure");
        }

        let relationship = route(&outcome);
        session.transfer(flowfile, relationship);
        Ok(Some(relationship))
    }

    fn on_stopped(&self) {
        Self::retire(self.replace_activation(None));
    }
}
