//! Chat endpoint contract.
//!
//! The request/response shapes of `POST /api/chat/general` and the
//! [`ChatBackend`] trait the transport layer implements. Keeping the trait here
//! lets the application layer drive a session without depending on an HTTP
//! client.

use crate::context::ContextCategory;
use crate::error::Result;
use crate::session::HistoryEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Path of the general chat endpoint, relative to the backend base URL.
pub const CHAT_ENDPOINT: &str = "/api/chat/general";

/// Assistant text shown in place of a reply when the backend cannot be reached
/// or answers with an error.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to the server. \
Please make sure the backend is running and try again.";

/// Body of a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ContextCategory,
    /// Up to five prior turns, oldest first.
    pub conversation_history: Vec<HistoryEntry>,
}

/// Body of a successful chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Category echoed back by the backend. Informational only; the reply is
    /// tagged with the category that was sent.
    #[serde(default)]
    pub context: Option<String>,
}

/// Something that can answer a chat request.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Performs exactly one request. Any failure (transport, status, body) is
    /// reported as an error; no retries.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply>;
}
