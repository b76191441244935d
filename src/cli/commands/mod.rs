//! CLI command implementations

pub mod scan;
pub mod validate;
