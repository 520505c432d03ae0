//! CLI commands

pub mod composition;
pub mod xrd;
