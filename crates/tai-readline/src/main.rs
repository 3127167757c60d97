use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use tai_application::{ChatUseCase, export_chat};
use tai_core::config::TaiConfig;
use tai_core::error::TaiError;
use tai_core::locale::example_prompts;
use tai_core::session::SessionStore;
use tai_interaction::HttpChatBackend;

mod commands;
mod display;

use commands::{HELP, ReplCommand};

const VOICE_UNSUPPORTED: &str = "Speech recognition is not supported in this terminal";

/// Rustyline helper for slash commands: completion from the command list,
/// argument hints taken from the help text, cyan for known commands and red
/// for unknown ones.
#[derive(Clone, Copy, Default)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = commands::completions(&line[..pos])
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let split = line.find(' ').unwrap_or(line.len());
        let (command, rest) = line.split_at(split);
        let command = if commands::is_known_command(command) {
            command.bright_cyan()
        } else {
            command.red()
        };
        Owned(format!("{command}{rest}"))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        commands::hint(line)
    }
}

impl Validator for CliHelper {}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves a short id typed by the user to a full message id.
fn resolve_id(store: &SessionStore, prefix: &str) -> Option<String> {
    let id = store.find_by_prefix(prefix).map(|m| m.id.clone());
    if id.is_none() {
        println!("{}", format!("No message matches '{}'", prefix).yellow());
    }
    id
}

/// Interactive chat REPL.
///
/// Each line is either a slash command acting on the session or a message
/// sent to the backend. A send completes before the prompt is shown again.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = TaiConfig::load()?;
    tracing::info!("[tai-chat] Backend: {}", config.api_base_url);
    let backend = Arc::new(HttpChatBackend::from_config(&config));
    let mut chat = ChatUseCase::new(backend, config.language);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== TAI ===".bright_magenta().bold());
    println!("{}", "Type a message, '/help' for commands, or 'quit' to exit.".bright_black());
    println!();
    display::print_messages(chat.store().messages(), chat.store().language());

    loop {
        let readline = rl.readline(">> ");

        let line = match readline {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        let language = chat.store().language();
        match commands::parse(&line) {
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Message(text) => {
                println!("{}", "Thinking...".bright_black());
                if chat.send(text).await.is_some() {
                    let messages = chat.store().messages();
                    display::print_messages(&messages[messages.len() - 2..], language);
                }
            }
            ReplCommand::New => {
                chat.store_mut().reset_to_welcome();
                display::print_messages(chat.store().messages(), language);
            }
            ReplCommand::React { id, reaction } => {
                if let Some(id) = resolve_id(chat.store(), id) {
                    chat.store_mut().toggle_reaction(&id, reaction);
                    if let Some(message) = chat.store().get(&id) {
                        println!("{}", display::header(message, language));
                    }
                }
            }
            ReplCommand::Pin(id) => {
                if let Some(id) = resolve_id(chat.store(), id) {
                    chat.store_mut().toggle_pin(&id);
                    if let Some(message) = chat.store().get(&id) {
                        println!("{}", display::header(message, language));
                    }
                }
            }
            ReplCommand::Delete(id) => {
                if let Some(id) = resolve_id(chat.store(), id) {
                    chat.store_mut().delete_message(&id);
                    println!("{}", "Message deleted.".bright_black());
                }
            }
            ReplCommand::Pinned => display::print_messages(chat.store().pinned(), language),
            ReplCommand::Search(query) => {
                display::print_messages(chat.store().search(query), language)
            }
            ReplCommand::History => display::print_messages(chat.store().messages(), language),
            ReplCommand::Export(dir) => {
                let dir = Path::new(dir.unwrap_or("."));
                match export_chat(chat.store(), dir).await {
                    Ok(path) => println!("{}", format!("Saved {}", path.display()).green()),
                    Err(e) => eprintln!("{}", format!("Export failed: {}", e).red()),
                }
            }
            ReplCommand::Lang(language) => {
                chat.store_mut().set_language(language);
                display::print_messages(chat.store().messages(), language);
            }
            ReplCommand::Examples => {
                for (index, prompt) in example_prompts(language).iter().enumerate() {
                    println!(
                        "{} {} {}",
                        format!("{}.", index + 1).bright_black(),
                        prompt.text,
                        format!("({})", prompt.category).cyan()
                    );
                }
            }
            ReplCommand::Voice => {
                eprintln!("{}", TaiError::unsupported(VOICE_UNSUPPORTED).to_string().red());
            }
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Usage(usage) => println!("{}", format!("Usage: {}", usage).yellow()),
            ReplCommand::Unknown(command) => {
                println!("{}", format!("Unknown command {}", command).bright_black())
            }
        }
    }

    Ok(())
}
