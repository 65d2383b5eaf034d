//! The flowfile logging processor.
//!
//! # Example
//!
//! ```
//! use flowfile_logger::flowfile::Attributes;
//! use flowfile_logger::processor::{LogProcessor, ProcessContext, Processor, Relationship};
//! use flowfile_logger::session::InMemorySession;
//!
//! let processor = LogProcessor::new();
//! let context = ProcessContext::new()
//!     .with_property(
//!         "logConfiguration",
//!         r#"{"pattern":"{l} {m}","appenders":[{"type":"console","target":"stderr"}]}"#,
//!     )
//!     .with_property("type", "info")
//!     .with_property("prefix", "orders");
//! processor.on_scheduled(&context).expect("valid configuration");
//!
//! let mut session = InMemorySession::new();
//! session.enqueue(Attributes::new(), "hello");
//!
//! let routed = processor.on_trigger(&mut session).expect("scheduled");
//! assert_eq!(routed, Some(Relationship::Success));
//! ```

mod _enums;
mod _traits;
mod activation;
mod config;
mod formatter;
mod log_processor;
mod property;
mod router;

// Re-exporting all public structures
pub use _enums::data_source::DataSource;
pub use _enums::input_requirement::InputRequirement;
pub use _enums::relationship::Relationship;

pub use _traits::processor::Processor;

pub use activation::Activation;
pub use config::{
    ProcessorConfig, ATTRIBUTES, LOG_CONFIGURATION, PREFIX, PROPERTY_DESCRIPTORS, SOURCE, TYPE,
};
pub use formatter::{attribute_string, format_line, render_attribute_map, FormattedLine};
pub use log_processor::LogProcessor;
pub use property::{ProcessContext, PropertyDescriptor};
pub use router::route;
