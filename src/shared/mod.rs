//! Helpers shared by the commands: config pattern expansion and executable lookup

pub mod glob;
pub mod process;
