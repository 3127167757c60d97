//! Tool endpoints over HTTP.

use crate::http::post_json;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tai_core::config::{TaiConfig, endpoint_url};
use tai_core::error::Result;
use tai_core::tool::ToolBackend;

#[derive(Clone)]
pub struct HttpToolClient {
    client: Client,
    base_url: String,
}

impl HttpToolClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &TaiConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }
}

#[async_trait]
impl ToolBackend for HttpToolClient {
    async fn post_json(&self, endpoint: &str, payload: Value) -> Result<Value> {
        let url = endpoint_url(&self.base_url, endpoint);
        post_json(&self.client, &url, &payload).await
    }
}
