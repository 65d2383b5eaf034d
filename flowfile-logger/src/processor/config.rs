//! Configuration surface of the logging processor and the immutable snapshot
//! built from it at activation.

use crate::error::ConfigurationError;
use crate::processor::property::{ProcessContext, PropertyDescriptor};
use crate::processor::DataSource;
use crate::sink::LogSeverity;
use std::str::FromStr;
use strum::VariantNames;

pub const LOG_CONFIGURATION: PropertyDescriptor = PropertyDescriptor {
    name: "logConfiguration",
    description: "Log configuration document (JSON) describing where formatted lines are written",
    required: true,
    allowable_values: &[],
    default_value: None,
    non_empty: true,
};

pub const TYPE: PropertyDescriptor = PropertyDescriptor {
    name: "type",
    description: "Specifies the logging type for incoming data. Default is 'error'.",
    required: true,
    allowable_values: <LogSeverity as VariantNames>::VARIANTS,
    default_value: Some("error"),
    non_empty: true,
};

pub const PREFIX: PropertyDescriptor = PropertyDescriptor {
    name: "prefix",
    description: "Specify the prefix for log messages.",
    required: false,
    allowable_values: &[],
    default_value: None,
    non_empty: true,
};

pub const SOURCE: PropertyDescriptor = PropertyDescriptor {
    name: "source",
    description: "Specifies the source of data to log.",
    required: true,
    allowable_values: <DataSource as VariantNames>::VARIANTS,
    default_value: Some("flowfile-content"),
    non_empty: true,
};

pub const ATTRIBUTES: PropertyDescriptor = PropertyDescriptor {
    name: "attributes",
    description: "Comma-separated attributes to be added to the log statement. \
                  Use with 'flowfile-content' logging source only.",
    required: false,
    allowable_values: &[],
    default_value: None,
    non_empty: true,
};

/// Declaration order, as advertised to the host.
pub const PROPERTY_DESCRIPTORS: [PropertyDescriptor; 5] =
    [LOG_CONFIGURATION, TYPE, PREFIX, SOURCE, ATTRIBUTES];

/// Configuration snapshot for one activation. Never mutated once built;
/// re-activation builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub prefix: Option<String>,
    pub severity: LogSeverity,
    pub data_source: DataSource,
    /// Only consulted when `data_source` is content-only.
    pub selected_attributes: Option<Vec<String>>,
    pub log_configuration: String,
}

impl ProcessorConfig {
    pub fn from_context(context: &ProcessContext) -> Result<Self, ConfigurationError> {
        let log_configuration = required(context, &LOG_CONFIGURATION)?.to_string();
        let severity = parse_enum(&TYPE, required(context, &TYPE)?)?;
        let data_source = parse_enum(&SOURCE, required(context, &SOURCE)?)?;
        let prefix = context.property(&PREFIX)?.map(str::to_string);
        let selected_attributes = context
            .property(&ATTRIBUTES)?
            .map(split_attribute_names)
            .filter(|names| !names.is_empty());

        Ok(Self {
            prefix,
            severity,
            data_source,
            selected_attributes,
            log_configuration,
        })
    }

    /// `[prefix]`, or nothing when no prefix is configured.
    pub fn prefix_display(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("[{prefix}]"),
            _ => String::new(),
        }
    }
}

fn required<'a>(
    context: &'a ProcessContext,
    descriptor: &PropertyDescriptor,
) -> Result<&'a str, ConfigurationError> {
    context
        .property(descriptor)?
        .ok_or_else(|| ConfigurationError::MissingProperty {
            name: descriptor.name.to_string(),
        })
}

fn parse_enum<T: FromStr>(
    descriptor: &PropertyDescriptor,
    value: &str,
) -> Result<T, ConfigurationError> {
    T::from_str(value).map_err(|_| ConfigurationError::InvalidPropertyValue {
        name: descriptor.name.to_string(),
        value: value.to_string(),
        allowed: descriptor.allowable_values.join(", "),
    })
}

/// Segments are kept verbatim, surrounding whitespace included. Empty
/// segments are dropped, so `"a,,b"` selects `a` and `b` only and `",,"`
/// selects nothing at all, rather than selecting an attribute named `""`.
pub(crate) fn split_attribute_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{"appenders":[{"type":"console"}]}"#;

    fn context() -> ProcessContext {
        ProcessContext::new().with_property("logConfiguration", DOC)
    }

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::from_context(&context()).expect("valid config");
        assert_eq!(config.severity, LogSeverity::Error);
        assert_eq!(config.data_source, DataSource::Content);
        assert_eq!(config.prefix, None);
        assert_eq!(config.selected_attributes, None);
        assert_eq!(config.log_configuration, DOC);
    }

    #[test]
    fn test_all_properties() {
        let ctx = context()
            .with_property("type", "info")
            .with_property("prefix", "orders")
            .with_property("source", "flowfile-content+flowfile-attribute")
            .with_property("attributes", "filename,uuid");
        let config = ProcessorConfig::from_context(&ctx).expect("valid config");

        assert_eq!(config.severity, LogSeverity::Info);
        assert_eq!(config.data_source, DataSource::ContentAndAttributes);
        assert_eq!(config.prefix.as_deref(), Some("orders"));
        assert_eq!(
            config.selected_attributes,
            Some(vec!["filename".to_string(), "uuid".to_string()])
        );
    }

    #[test]
    fn test_missing_log_configuration() {
        let err = ProcessorConfig::from_context(&ProcessContext::new()).expect_err("should fail");
        assert!(
            matches!(err, ConfigurationError::MissingProperty { name } if name == "logConfiguration")
        );
    }

    #[test]
    fn test_invalid_type() {
        let err = ProcessorConfig::from_context(&context().with_property("type", "warn"))
            .expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "property 'type' has value 'warn', expected one of: info, error"
        );
    }

    #[test]
    fn test_invalid_source() {
        let err = ProcessorConfig::from_context(&context().with_property("source", "content"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigurationError::InvalidPropertyValue { .. }));
    }

    #[test]
    fn test_prefix_display() {
        let mut config = ProcessorConfig::from_context(&context()).expect("valid config");
        assert_eq!(config.prefix_display(), "");
        config.prefix = Some("X".to_string());
        assert_eq!(config.prefix_display(), "[X]");
        config.prefix = Some(String::new());
        assert_eq!(config.prefix_display(), "");
    }

    #[test]
    fn test_whitespace_prefix_and_attributes_are_accepted() {
        let ctx = context()
            .with_property("prefix", "  ")
            .with_property("attributes", " ");
        let config = ProcessorConfig::from_context(&ctx).expect("valid config");
        assert_eq!(config.prefix.as_deref(), Some("  "));
        assert_eq!(config.prefix_display(), "[  ]");
        assert_eq!(config.selected_attributes, Some(vec![" ".to_string()]));
    }

    #[test]
    fn test_empty_prefix_is_unset() {
        let config = ProcessorConfig::from_context(&context().with_property("prefix", ""))
            .expect("valid config");
        assert_eq!(config.prefix, None);
    }

    #[test]
    fn test_split_attribute_names_only_separators() {
        assert!(split_attribute_names(",,").is_empty());
    }

    #[test]
    fn test_split_attribute_names_keeps_segments_verbatim() {
        assert_eq!(
            split_attribute_names("a, b,,c,"),
            vec!["a".to_string(), " b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_attributes_of_only_commas_is_unset() {
        let config = ProcessorConfig::from_context(&context().with_property("attributes", ",,"))
            .expect("valid config");
        assert_eq!(config.selected_attributes, None);
    }

    #[test]
    fn test_descriptor_order() {
        let names: Vec<&str> = PROPERTY_DESCRIPTORS.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["logConfiguration", "type", "prefix", "source", "attributes"]
        );
    }
}
