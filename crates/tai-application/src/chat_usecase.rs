//! Chat send lifecycle.
//!
//! `ChatUseCase` owns the session store and drives one send at a time:
//! classify the input, append the user message, call the backend, then append
//! exactly one assistant message (the reply or the fallback text).

use std::sync::Arc;
use tai_core::chat::{ChatBackend, ChatRequest, FALLBACK_REPLY};
use tai_core::context::classify;
use tai_core::locale::Language;
use tai_core::session::SessionStore;

/// How a send completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend replied and the reply was appended.
    Replied,
    /// The request failed and the fallback text was appended.
    Fallback,
}

pub struct ChatUseCase<B: ChatBackend> {
    store: SessionStore,
    backend: Arc<B>,
}

impl<B: ChatBackend> ChatUseCase<B> {
    /// Creates a use case with a fresh session seeded with the welcome message.
    pub fn new(backend: Arc<B>, language: Language) -> Self {
        Self {
            store: SessionStore::new(language),
            backend,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Direct access for reactions, pins, deletion and resets.
    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    /// Sends one user message.
    ///
    /// Surrounding whitespace is stripped before the text is classified,
    /// stored and sent.
    ///
    /// Returns `None` without touching the session when the input is blank or
    /// a send is already in flight. Otherwise the session grows by exactly two
    /// messages and the loading flag is cleared before returning.
    pub async fn send(&mut self, input: &str) -> Option<SendOutcome> {
        let input = input.trim();
        if input.is_empty() || self.store.is_loading() {
            return None;
        }

        let context = classify(input);
        let request = ChatRequest {
            message: input.to_string(),
            context,
            conversation_history: self.store.history_window(),
        };

        self.store.append_user_message(input);
        self.store.set_loading(true);
        tracing::debug!(
            "[ChatUseCase] Sending message (context: {}, history: {})",
            context,
            request.conversation_history.len()
        );

        let outcome = match self.backend.send(&request).await {
            Ok(reply) => {
                self.store
                    .append_assistant_message(reply.response, Some(context));
                SendOutcome::Replied
            }
            Err(e) => {
                tracing::error!("[ChatUseCase] Chat request failed: {}", e);
                self.store.append_assistant_message(FALLBACK_REPLY, None);
                SendOutcome::Fallback
            }
        };

        self.store.set_loading(false);
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tai_core::chat::ChatReply;
    use tai_core::context::ContextCategory;
    use tai_core::error::{Result, TaiError};
    use tai_core::session::MessageRole;

    /// Backend that records requests and answers with a fixed result.
    struct MockChatBackend {
        reply: Result<ChatReply>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl MockChatBackend {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(ChatReply {
                    response: text.to_string(),
                    context: None,
                }),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: TaiError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<ChatRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatBackend for MockChatBackend {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_debug_scenario_grows_session_by_two() {
        let backend = MockChatBackend::replying("Check your list bounds.");
        let mut chat = ChatUseCase::new(backend.clone(), Language::En);

        let outcome = chat.send("Debug my code: IndexError").await;

        assert_eq!(outcome, Some(SendOutcome::Replied));
        assert_eq!(chat.store().len(), 3);
        assert!(!chat.store().is_loading());

        let last = chat.store().last().unwrap();
        assert_eq!(last.role, MessageRole::Assistant);
        assert_eq!(last.content, "Check your list bounds.");
        assert_eq!(last.context, Some(ContextCategory::Debugging));

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].context, ContextCategory::Debugging);
    }

    #[tokio::test]
    async fn test_server_error_appends_fallback() {
        let backend = MockChatBackend::failing(TaiError::http(Some(500), "Internal Server Error"));
        let mut chat = ChatUseCase::new(backend, Language::En);

        let outcome = chat.send("hello there").await;

        assert_eq!(outcome, Some(SendOutcome::Fallback));
        assert_eq!(chat.store().len(), 3);
        assert!(!chat.store().is_loading());

        let last = chat.store().last().unwrap();
        assert_eq!(last.content, FALLBACK_REPLY);
        assert_eq!(last.context, None);
    }

    #[tokio::test]
    async fn test_history_excludes_current_message_and_caps_at_five() {
        let backend = MockChatBackend::replying("ok");
        let mut chat = ChatUseCase::new(backend.clone(), Language::En);

        for text in ["one", "two", "three", "four"] {
            chat.send(text).await;
        }

        let requests = backend.requests();
        assert_eq!(requests[0].conversation_history.len(), 1);
        assert_eq!(requests[0].conversation_history[0].role, MessageRole::Assistant);

        let last = &requests[3];
        assert_eq!(last.message, "four");
        assert_eq!(last.conversation_history.len(), 5);
        assert!(last.conversation_history.iter().all(|h| h.content != "four"));
        assert_eq!(last.conversation_history[4].content, "ok");
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_storing_and_sending() {
        let backend = MockChatBackend::replying("hi");
        let mut chat = ChatUseCase::new(backend.clone(), Language::En);

        chat.send("  hello there \n").await;

        assert_eq!(backend.requests()[0].message, "hello there");
        assert_eq!(chat.store().messages()[1].content, "hello there");
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let backend = MockChatBackend::replying("ok");
        let mut chat = ChatUseCase::new(backend.clone(), Language::En);

        assert_eq!(chat.send("   ").await, None);
        assert_eq!(chat.store().len(), 1);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_send_while_loading_is_ignored() {
        let backend = MockChatBackend::replying("ok");
        let mut chat = ChatUseCase::new(backend.clone(), Language::En);
        chat.store_mut().set_loading(true);

        assert_eq!(chat.send("write code").await, None);
        assert_eq!(chat.store().len(), 1);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_every_send_adds_exactly_one_assistant_message() {
        let ok = MockChatBackend::replying("fine");
        let failing = MockChatBackend::failing(TaiError::http(None, "connection refused"));
        let mut good = ChatUseCase::new(ok, Language::En);
        let mut bad = ChatUseCase::new(failing, Language::Sw);

        for chat_len in [3, 5, 7] {
            good.send("create an api").await;
            bad.send("create an api").await;
            assert_eq!(good.store().len(), chat_len);
            assert_eq!(bad.store().len(), chat_len);
        }
    }
}
