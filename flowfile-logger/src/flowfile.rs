//! The unit of work handed over by the host.

use std::collections::BTreeMap;
use std::fmt;

/// Flowfile attributes. Keys are unique and iterate in ascending order, which
/// keeps every rendering of the map deterministic.
pub type Attributes = BTreeMap<String, String>;

/// Well-known attribute carrying the original file name.
pub const FILENAME_ATTRIBUTE: &str = "filename";

/// A flowfile as seen by a processor: host identity, attributes and the size
/// of its content. The content itself stays with the session and is read on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowFile {
    id: u64,
    attributes: Attributes,
    size: u64,
}

impl FlowFile {
    pub fn new(id: u64, attributes: Attributes, size: u64) -> Self {
        Self {
            id,
            attributes,
            size,
        }
    }

    /// Host-assigned identity, used when reporting faults.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for FlowFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlowFile[id={},filename={},size={}]",
            self.id,
            self.attribute(FILENAME_ATTRIBUTE).unwrap_or(""),
            self.size
        )
    }
}
