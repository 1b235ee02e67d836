//! CLI command implementations.

pub mod edit;
pub mod edits;
pub mod journal;
pub mod log;
