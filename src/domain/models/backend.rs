use anyhow::Result;
use async_trait::async_trait;

use super::ChatRequest;
use super::ChatResponse;

#[async_trait]
pub trait ChatBackend {
    /// Used at startup to verify the chat API can be reached before the
    /// first message is sent.
    async fn health_check(&self) -> Result<()>;

    /// Sends a single message and waits for the full reply. Any transport or
    /// decoding failure is returned as an error.
    async fn send(&self, request: ChatRequest) -> Result<ChatResponse>;
}

pub type BackendBox = Box<dyn ChatBackend + Send + Sync>;
