//! Command implementations for the gitsecure CLI

pub mod analyze;
pub mod base;

pub use analyze::AnalyzeCommand;
pub use base::{Command, CommandContext};
