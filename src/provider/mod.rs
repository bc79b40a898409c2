//! Text-completion provider trait and implementations.

pub mod http;
pub mod openai_compatible;

pub use openai_compatible::ChatCompletionsProvider;

use async_trait::async_trait;

use crate::error::DetourError;
use crate::types::Message;

/// A request sent to a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Effective system prompt, including any tool catalogue block.
    pub system: Option<String>,
    /// Conversation so far, oldest first.
    pub messages: Vec<Message>,
    /// Output token budget for this call.
    pub max_output_tokens: u32,
}

/// Core trait implemented by all completion providers.
///
/// The agent makes no assumptions about transport; anything that can turn a
/// message sequence into assistant text can back an agent.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name (e.g., "openai-compatible").
    fn name(&self) -> &str;

    /// Produce one assistant reply for the request.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DetourError>;
}
