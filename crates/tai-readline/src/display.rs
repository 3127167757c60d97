//! Terminal rendering of chat messages.

use chrono::Local;
use colored::Colorize;
use tai_core::locale::{Language, category_label};
use tai_core::render::{Segment, Span, render};
use tai_core::session::Message;

/// Length of the id prefix shown next to each message.
pub const SHORT_ID_LEN: usize = 8;

pub fn short_id(message: &Message) -> &str {
    message.id.get(..SHORT_ID_LEN).unwrap_or(&message.id)
}

/// Header line: short id, speaker, time, context label and flags.
pub fn header(message: &Message, language: Language) -> String {
    let speaker = if message.is_user() {
        "You".green().bold()
    } else {
        "TAI".bright_magenta().bold()
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");

    let mut line = format!("[{}] {} {}", short_id(message), speaker, time.to_string().bright_black());
    if let Some(context) = message.context {
        line.push_str(&format!(" {}", category_label(context, language).cyan()));
    }
    if message.liked {
        line.push_str(" 👍");
    }
    if message.disliked {
        line.push_str(" 👎");
    }
    if message.pinned {
        line.push_str(" 📌");
    }
    line
}

/// Message body with code blocks boxed and inline markup highlighted.
pub fn body(content: &str) -> String {
    render(content)
        .iter()
        .map(|segment| match segment {
            Segment::Code(block) => {
                let mut lines = vec![format!("┌─ {}", block.language).bright_black().to_string()];
                for line in block.body.lines() {
                    lines.push(format!("{} {}", "│".bright_black(), line.bright_white()));
                }
                lines.push("└─".bright_black().to_string());
                format!("\n{}\n", lines.join("\n"))
            }
            Segment::Text(spans) => spans
                .iter()
                .map(|span| match span {
                    Span::Plain(text) => text.clone(),
                    Span::InlineCode(code) => code.yellow().to_string(),
                    Span::Bold(text) => text.bold().to_string(),
                })
                .collect(),
        })
        .collect::<String>()
        .trim_matches('\n')
        .to_string()
}

pub fn print_message(message: &Message, language: Language) {
    println!("{}", header(message, language));
    println!("{}", body(&message.content));
    println!();
}

pub fn print_messages<'a>(messages: impl IntoIterator<Item = &'a Message>, language: Language) {
    let mut any = false;
    for message in messages {
        print_message(message, language);
        any = true;
    }
    if !any {
        println!("{}", "No messages.".bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tai_core::context::ContextCategory;
    use tai_core::session::MessageRole;

    #[test]
    fn test_short_id_is_prefix() {
        let message = Message::new(MessageRole::User, "hi");
        assert_eq!(short_id(&message).len(), SHORT_ID_LEN);
        assert!(message.id.starts_with(short_id(&message)));
    }

    #[test]
    fn test_body_boxes_code_blocks() {
        let text = body("Try this:\n```python\nprint(1)\n```");
        assert!(text.starts_with("Try this:"));
        assert!(text.contains("┌─ python"));
        assert!(text.contains("print(1)"));
        assert!(text.contains("└─"));
    }

    #[test]
    fn test_header_shows_context_label() {
        let message = Message::new(MessageRole::Assistant, "ok")
            .with_context(Some(ContextCategory::Debugging));
        let line = header(&message, Language::En);
        assert!(line.contains("Debugging"));
        assert!(line.contains(short_id(&message)));
    }

    #[test]
    fn test_header_names_the_speaker() {
        let user = header(&Message::new(MessageRole::User, "hi"), Language::En);
        let reply = header(&Message::new(MessageRole::Assistant, "hey"), Language::En);
        assert!(user.contains("You"));
        assert!(!user.contains("TAI"));
        assert!(reply.contains("TAI"));
    }
}
