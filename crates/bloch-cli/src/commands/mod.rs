//! CLI command implementations.

pub mod about;
pub mod common;
pub mod handoff;
pub mod interactive;
pub mod replay;
pub mod version;
