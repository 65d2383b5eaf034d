use crate::error::ProcessError;
use crate::processor::Relationship;

/// Map the outcome of read + format + emit to an output channel.
pub fn route(outcome: &Result<(), ProcessError>) -> Relationship {
    match outcome {
        Ok(()) => Relationship::Success,
        Err(_) => Relationship::Failure,
    }
}
