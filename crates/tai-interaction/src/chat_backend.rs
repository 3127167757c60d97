//! `POST /api/chat/general` over HTTP.

use crate::http::post_json;
use async_trait::async_trait;
use reqwest::Client;
use tai_core::chat::{CHAT_ENDPOINT, ChatBackend, ChatReply, ChatRequest};
use tai_core::config::{TaiConfig, endpoint_url};
use tai_core::error::Result;

/// Chat backend reached over HTTP. One request per send, no retries.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    base_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &TaiConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = endpoint_url(&self.base_url, CHAT_ENDPOINT);
        let value = post_json(&self.client, &url, request).await?;
        let reply: ChatReply = serde_json::from_value(value)?;

        tracing::debug!(
            "[HttpChatBackend] Reply received ({} chars, context {:?})",
            reply.response.len(),
            reply.context
        );
        Ok(reply)
    }
}
