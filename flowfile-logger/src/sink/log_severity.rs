/// Log severity levels understood by the log sink
use serde::Deserialize;
use std::fmt;
use strum_macros::{EnumString, VariantNames};

/// Severity of a formatted line. Ordered so that `Info < Error`, which is
/// what sink level thresholds compare against.
#[derive(
    EnumString, VariantNames, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Info,
    Error,
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSeverity::Info => write!(f, "INFO"),
            LogSeverity::Error => write!(f, "ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::VariantNames;

    #[test]
    fn test_log_severity_display() {
        assert_eq!(LogSeverity::Info.to_string(), "INFO");
        assert_eq!(LogSeverity::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_log_severity_from_property_value() {
        assert_eq!(LogSeverity::from_str("info").ok(), Some(LogSeverity::Info));
        assert_eq!(LogSeverity::from_str("error").ok(), Some(LogSeverity::Error));
        assert!(LogSeverity::from_str("warning").is_err());
        assert!(LogSeverity::from_str("INFO").is_err());
    }

    #[test]
    fn test_log_severity_variants() {
        assert_eq!(LogSeverity::VARIANTS, &["info", "error"]);
    }

    #[test]
    fn test_log_severity_ordering() {
        assert!(LogSeverity::Info < LogSeverity::Error);
    }

    #[test]
    fn test_log_severity_deserialize() {
        let level: LogSeverity = serde_json::from_str("\"error\"").expect("valid level");
        assert_eq!(level, LogSeverity::Error);
        assert!(serde_json::from_str::<LogSeverity>("\"debug\"").is_err());
    }
}
