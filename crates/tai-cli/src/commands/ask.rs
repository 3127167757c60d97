use anyhow::Result;
use std::sync::Arc;
use tai_application::ChatUseCase;
use tai_core::config::TaiConfig;
use tai_interaction::HttpChatBackend;

/// Sends one message in a fresh session and prints the assistant's reply.
pub async fn run(config: &TaiConfig, message: &str) -> Result<()> {
    let backend = Arc::new(HttpChatBackend::from_config(config));
    let mut chat = ChatUseCase::new(backend, config.language);

    if chat.send(message).await.is_some() {
        if let Some(reply) = chat.store().last() {
            println!("{}", reply.content);
        }
    }

    Ok(())
}
