//! REPL command parsing.

use std::str::FromStr;
use tai_core::locale::Language;
use tai_core::session::Reaction;

/// Slash commands offered for completion.
pub const COMMANDS: &[&str] = &[
    "/new", "/like", "/dislike", "/pin", "/delete", "/pinned", "/search", "/history", "/export",
    "/lang", "/examples", "/voice", "/help",
];

pub const HELP: &str = "\
/new               start a new chat
/like <id>         toggle like on a message
/dislike <id>      toggle dislike on a message
/pin <id>          toggle pin on a message
/delete <id>       delete a message
/pinned            list pinned messages
/search <text>     list messages containing text
/history           show the whole conversation
/export [dir]      write the transcript to a file
/lang <en|sw>      switch language (starts a new chat)
/examples          show example prompts
/voice             voice input
/help              show this help
quit               exit";

/// Commands starting with the typed slash prefix. Empty once an argument
/// is being typed.
pub fn completions(line: &str) -> Vec<&'static str> {
    if !line.starts_with('/') || line.contains(' ') {
        return vec![];
    }
    COMMANDS.iter().copied().filter(|cmd| cmd.starts_with(line)).collect()
}

/// The argument placeholder listed in [`HELP`] for a command, e.g. `<id>`.
pub fn argument_hint(command: &str) -> Option<&'static str> {
    HELP.lines().find_map(|entry| {
        let mut words = entry.split_whitespace();
        if words.next()? != command {
            return None;
        }
        words.next().filter(|arg| arg.starts_with('<') || arg.starts_with('['))
    })
}

/// Inline hint: the rest of the first matching command, or its argument
/// placeholder once the command is complete.
pub fn hint(line: &str) -> Option<String> {
    if COMMANDS.contains(&line) {
        return argument_hint(line).map(|arg| format!(" {arg}"));
    }
    completions(line)
        .first()
        .map(|cmd| cmd[line.len()..].to_string())
}

/// Whether the first word of the line is a known slash command.
pub fn is_known_command(line: &str) -> bool {
    let word = line.split_whitespace().next().unwrap_or_default();
    COMMANDS.contains(&word)
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Quit,
    New,
    React { id: &'a str, reaction: Reaction },
    Pin(&'a str),
    Delete(&'a str),
    Pinned,
    Search(&'a str),
    History,
    Export(Option<&'a str>),
    Lang(Language),
    Examples,
    Voice,
    Help,
    /// A known command with missing or invalid arguments.
    Usage(&'static str),
    Unknown(&'a str),
    /// Anything that is not a command is sent to the assistant.
    Message(&'a str),
}

pub fn parse(line: &str) -> ReplCommand<'_> {
    let trimmed = line.trim();
    if trimmed == "quit" || trimmed == "exit" {
        return ReplCommand::Quit;
    }
    if !trimmed.starts_with('/') {
        return ReplCommand::Message(trimmed);
    }

    let (command, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (trimmed, ""),
    };
    let arg = (!arg.is_empty()).then_some(arg);

    match (command, arg) {
        ("/new", _) => ReplCommand::New,
        ("/like", Some(id)) => ReplCommand::React {
            id,
            reaction: Reaction::Like,
        },
        ("/dislike", Some(id)) => ReplCommand::React {
            id,
            reaction: Reaction::Dislike,
        },
        ("/pin", Some(id)) => ReplCommand::Pin(id),
        ("/delete", Some(id)) => ReplCommand::Delete(id),
        ("/like" | "/dislike" | "/pin" | "/delete", None) => ReplCommand::Usage("<id> required"),
        ("/pinned", _) => ReplCommand::Pinned,
        ("/search", Some(query)) => ReplCommand::Search(query),
        ("/search", None) => ReplCommand::Usage("/search <text>"),
        ("/history", _) => ReplCommand::History,
        ("/export", dir) => ReplCommand::Export(dir),
        ("/lang", arg) => match arg.and_then(|code| Language::from_str(code).ok()) {
            Some(language) => ReplCommand::Lang(language),
            None => ReplCommand::Usage("/lang <en|sw>"),
        },
        ("/examples", _) => ReplCommand::Examples,
        ("/voice", _) => ReplCommand::Voice,
        ("/help", _) => ReplCommand::Help,
        (other, _) => ReplCommand::Unknown(other),
    }
}
