//! Turns one flowfile and the active configuration into a log line.
//!
//! Line layout is `prefix + " " + body + " " + attributes`, where each part
//! may be empty. Existing downstream parsers depend on the exact spacing, so
//! empty parts still contribute their separating space.

use crate::error::DecodeError;
use crate::flowfile::Attributes;
use crate::processor::config::ProcessorConfig;
use crate::sink::LogSeverity;
use std::collections::BTreeMap;

const CONTENT_LABEL: &str = "flowfile-content: ";
const ATTRIBUTE_LABEL: &str = "flowfile-attribute: ";
const ABSENT_VALUE: &str = "null";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub severity: LogSeverity,
    pub text: String,
}

/// Format a flowfile. Pure: no I/O, same inputs give the same line.
///
/// Fails only when the configured source includes content and `content` is
/// not valid UTF-8.
pub fn format_line(
    config: &ProcessorConfig,
    attributes: &Attributes,
    content: &[u8],
) -> Result<FormattedLine, DecodeError> {
    let body = if config.data_source.includes_content() {
        format!("{CONTENT_LABEL}{}", std::str::from_utf8(content)?)
    } else {
        String::new()
    };

    let text = format!(
        "{} {} {}",
        config.prefix_display(),
        body,
        attribute_string(config, attributes)
    );

    Ok(FormattedLine {
        severity: config.severity,
        text,
    })
}

/// The attribute part of the line, or an empty string when none applies.
pub fn attribute_string(config: &ProcessorConfig, attributes: &Attributes) -> String {
    if config.data_source.includes_attributes() {
        let entries = attributes
            .iter()
            .map(|(k, v)| (k.as_str(), Some(v.as_str())));
        return format!("{ATTRIBUTE_LABEL}{}", render_attribute_map(entries));
    }

    match config.selected_attributes.as_deref() {
        Some(names) if !names.is_empty() => {
            // Names missing from the flowfile stay in the map as `null`.
            let selected: BTreeMap<&str, Option<&str>> = names
                .iter()
                .map(|name| (name.as_str(), attributes.get(name).map(String::as_str)))
                .collect();
            format!("{ATTRIBUTE_LABEL}{}", render_attribute_map(selected))
        }
        _ => String::new(),
    }
}

/// Renders `{k1=v1, k2=v2}`; absent values print as `null`.
pub fn render_attribute_map<'a>(
    entries: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> String {
    let body = entries
        .into_iter()
        .map(|(key, value)| format!("{key}={}", value.unwrap_or(ABSENT_VALUE)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}
