//! HTTP transport for the TAI backend.
//!
//! Implements the [`ChatBackend`](tai_core::chat::ChatBackend) and
//! [`ToolBackend`](tai_core::tool::ToolBackend) traits with `reqwest`.

mod http;

pub mod chat_backend;
pub mod tool_client;

pub use chat_backend::HttpChatBackend;
pub use tool_client::HttpToolClient;
