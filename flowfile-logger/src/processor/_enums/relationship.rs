use strum_macros::{Display, EnumString, VariantNames};

/// Output channels of a processor. Every flowfile pulled from the session is
/// transferred to exactly one of them.
#[derive(Display, EnumString, VariantNames, Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Relationship {
    Success,
    Failure,
}

impl Relationship {
    pub fn description(&self) -> &'static str {
        match self {
            Relationship::Success => "Success",
            Relationship::Failure => "Failed to process",
        }
    }
}
