//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the front-end drives the conversation session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive chat loop until the user exits.
    async fn run(&self) -> Result<(), DomainError>;
}
