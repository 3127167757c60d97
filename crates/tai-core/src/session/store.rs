use super::message::{HistoryEntry, Message, MessageRole, Reaction};
use crate::context::ContextCategory;
use crate::locale::{self, Language};

/// Number of prior turns forwarded to the backend with each send.
pub const HISTORY_WINDOW: usize = 5;

/// Owns the ordered message list of the current session.
///
/// `SessionStore` is responsible for:
/// - Appending user and assistant messages in display order (newest last)
/// - Tracking whether a send is in flight
/// - Per-message flags (liked / disliked / pinned) and deletion
/// - Resetting to the seeded welcome message
///
/// Operations addressing a message by id silently do nothing when the id is
/// unknown.
#[derive(Debug, Clone)]
pub struct SessionStore {
    messages: Vec<Message>,
    loading: bool,
    language: Language,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SessionStore {
    /// Creates a session seeded with the welcome message.
    ///
    /// # Examples
    ///
    /// ```
    /// use tai_core::locale::Language;
    /// use tai_core::session::{MessageRole, SessionStore};
    ///
    /// let store = SessionStore::new(Language::En);
    /// assert_eq!(store.len(), 1);
    /// assert_eq!(store.messages()[0].role, MessageRole::Assistant);
    /// ```
    pub fn new(language: Language) -> Self {
        let mut store = Self {
            messages: Vec::new(),
            loading: false,
            language,
        };
        store.reset_to_welcome();
        store
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the display language. The session is reseeded with the
    /// welcome message in the new language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.reset_to_welcome();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks a send as in flight (or finished). Front ends disable sending
    /// while this is `true`.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Appends a user message and returns it.
    pub fn append_user_message(&mut self, text: impl Into<String>) -> &Message {
        self.push(Message::new(MessageRole::User, text))
    }

    /// Appends an assistant message carrying the category it answered.
    pub fn append_assistant_message(
        &mut self,
        text: impl Into<String>,
        context: Option<ContextCategory>,
    ) -> &Message {
        self.push(Message::new(MessageRole::Assistant, text).with_context(context))
    }

    /// Toggles a like/dislike on the message with the given id.
    pub fn toggle_reaction(&mut self, id: &str, reaction: Reaction) {
        if let Some(message) = self.get_mut(id) {
            message.toggle_reaction(reaction);
        }
    }

    /// Toggles the pinned flag on the message with the given id.
    pub fn toggle_pin(&mut self, id: &str) {
        if let Some(message) = self.get_mut(id) {
            message.pinned = !message.pinned;
        }
    }

    /// Removes the message with the given id, keeping the order of the rest.
    ///
    /// Returns whether a message was removed.
    pub fn delete_message(&mut self, id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    /// Replaces the whole session with a single welcome message.
    pub fn reset_to_welcome(&mut self) {
        let welcome = Message::new(MessageRole::Assistant, locale::welcome_message(self.language));
        self.messages = vec![welcome];
    }

    /// The last [`HISTORY_WINDOW`] messages as role/content pairs.
    ///
    /// Call this before appending the new user message to get the "prior
    /// turns" window.
    pub fn history_window(&self) -> Vec<HistoryEntry> {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        self.messages[start..].iter().map(HistoryEntry::from).collect()
    }

    /// Pinned messages in display order.
    pub fn pinned(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.pinned)
    }

    /// Messages whose content contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Message> {
        let needle = query.to_lowercase();
        self.messages
            .iter()
            .filter(|m| m.content.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolves a message from a unique id prefix. Unknown and ambiguous
    /// prefixes resolve to `None`.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Message> {
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self.messages.iter().filter(|m| m.id.starts_with(prefix));
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Plain-text transcript, one `You:` / `TAI:` block per message.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| {
                let speaker = match m.role {
                    MessageRole::User => "You",
                    MessageRole::Assistant => "TAI",
                };
                format!("{}: {}", speaker, m.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        // Safe to unwrap because we just pushed an element
        self.messages.last().unwrap()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
