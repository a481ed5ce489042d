//! Watson Assistant integration - the conversation provider behind the gateway

pub mod client;

use async_trait::async_trait;
use serde_json::Value;

pub use client::WatsonAssistant;

/// Failure while talking to the conversation provider.
///
/// Handlers log this and answer with a generic message; it is never
/// serialized into an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Remote service owning conversation sessions and producing replies.
///
/// Handlers depend on this seam instead of a concrete client, so tests can
/// substitute the provider without any network.
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// Allocate a new conversation session and return its identifier.
    async fn create_session(&self) -> Result<String, ProviderError>;

    /// Send one user utterance into an existing session and return the
    /// provider's generic output items.
    async fn send_message(&self, session_id: &str, text: &str)
        -> Result<Vec<Value>, ProviderError>;
}
