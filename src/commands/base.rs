//! Base types and traits for the command pattern

use anyhow::Result;

/// Context passed to all commands containing shared credentials
#[derive(Clone)]
pub struct CommandContext {
    /// GitHub token used for every API request
    pub token: String,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
