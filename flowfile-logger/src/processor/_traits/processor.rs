use crate::error::{ConfigurationError, TriggerError};
use crate::processor::{InputRequirement, ProcessContext, PropertyDescriptor, Relationship};
use crate::session::ProcessSession;

/// Host-facing lifecycle of a processor.
///
/// The host calls `on_scheduled` before any `on_trigger`, serializes
/// triggers against re-scheduling of the same instance, and calls
/// `on_stopped` when the processor is taken out of service.
pub trait Processor: Send + Sync {
    fn name(&self) -> String;
    fn description(&self) -> String;
    fn tags(&self) -> Vec<String>;
    fn property_descriptors(&self) -> Vec<PropertyDescriptor>;
    fn relationships(&self) -> Vec<Relationship>;

    fn input_requirement(&self) -> InputRequirement {
        InputRequirement::Allowed
    }

    fn supports_batching(&self) -> bool {
        false
    }

    /// Load configuration. An error leaves the processor unable to trigger.
    fn on_scheduled(&self, context: &ProcessContext) -> Result<(), ConfigurationError>;

    /// Process at most one flowfile from `session`. Returns where it was
    /// routed, or `None` when the session had nothing queued.
    fn on_trigger(
        &self,
        session: &mut dyn ProcessSession,
    ) -> Result<Option<Relationship>, TriggerError>;

    fn on_stopped(&self) {}
}
