//! Session domain module.
//!
//! This module contains the chat message model and the in-memory session
//! store that owns the message list for the current run.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `Message`, `Reaction`, `HistoryEntry`)
//! - `store`: The ordered message list and its operations (`SessionStore`)

mod message;
mod store;

// Re-export public API
pub use message::{HistoryEntry, Message, MessageRole, Reaction};
pub use store::{HISTORY_WINDOW, SessionStore};
