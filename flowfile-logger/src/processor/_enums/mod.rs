pub mod data_source;
pub mod input_requirement;
pub mod relationship;
