/// Whether a processor needs an incoming connection to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputRequirement {
    Required,
    #[default]
    Allowed,
    Forbidden,
}

impl std::fmt::Display for InputRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputRequirement::Required => write!(f, "INPUT_REQUIRED"),
            InputRequirement::Allowed => write!(f, "INPUT_ALLOWED"),
            InputRequirement::Forbidden => write!(f, "INPUT_FORBIDDEN"),
        }
    }
}
