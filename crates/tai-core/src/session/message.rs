//! Chat message types.

use crate::context::ContextCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Reply from the assistant (including the welcome and fallback texts).
    Assistant,
}

/// Feedback a user can leave on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

/// A single message in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque unique identifier.
    pub id: String,
    pub role: MessageRole,
    /// Message text; may embed fenced code blocks.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Category the reply was produced for. Set on successful assistant
    /// replies only and never changed afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextCategory>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
    #[serde(default)]
    pub pinned: bool,
}

impl Message {
    /// Creates a message stamped with a fresh id and the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            context: None,
            liked: false,
            disliked: false,
            pinned: false,
        }
    }

    /// Attaches the category a reply was produced for.
    pub fn with_context(mut self, context: Option<ContextCategory>) -> Self {
        self.context = context;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    /// Applies a like/dislike toggle. The two flags are mutually exclusive;
    /// toggling the active reaction clears it.
    pub(crate) fn toggle_reaction(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Like => {
                self.liked = !self.liked;
                self.disliked = false;
            }
            Reaction::Dislike => {
                self.disliked = !self.disliked;
                self.liked = false;
            }
        }
    }
}

/// One prior turn as sent to the backend in `conversation_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}
