use strum_macros::{Display, EnumString, VariantNames};

/// Which parts of a flowfile end up in the log line.
#[derive(Display, EnumString, VariantNames, Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum DataSource {
    #[strum(serialize = "flowfile-content")]
    Content,
    #[strum(serialize = "flowfile-attribute")]
    Attributes,
    #[strum(serialize = "flowfile-content+flowfile-attribute")]
    ContentAndAttributes,
}

impl DataSource {
    pub fn includes_content(self) -> bool {
        matches!(self, DataSource::Content | DataSource::ContentAndAttributes)
    }

    pub fn includes_attributes(self) -> bool {
        matches!(
            self,
            DataSource::Attributes | DataSource::ContentAndAttributes
        )
    }
}
