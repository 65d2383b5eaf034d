#![forbid(unsafe_code)]

mod error;
pub mod flowfile;
pub mod processor;
pub mod session;
pub mod sink;

pub use crate::error::{
    ConfigurationError, DecodeError, ProcessError, SinkEmitError, TriggerError,
};

///
/// Expose everything a host needs to drive the processor
///
/// ```
/// use flowfile_logger::prelude::*;
/// ```
pub mod prelude {
    pub use crate::flowfile::{Attributes, FlowFile};
    pub use crate::processor::{LogProcessor, ProcessContext, Processor, Relationship};
    pub use crate::session::{InMemorySession, ProcessSession};
    pub use crate::sink::{DocumentSinkFactory, LogSeverity, LogSink, SinkFactory};
    pub use crate::{ConfigurationError, TriggerError};
}
