//! Context classification for chat input.
//!
//! Every user message is tagged with a coarse category before it is sent to
//! the backend. The backend uses the category to pick a system prompt; front
//! ends use it to label assistant replies.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of categories a chat message can be classified into.
///
/// The string form (`code_generation`, `debugging`, ...) is the wire value sent
/// in the `context` field of a chat request.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContextCategory {
    CodeGeneration,
    Debugging,
    ApiHelp,
    CliHelp,
    Portfolio,
    General,
}

/// Keyword rules in priority order. The first rule with a keyword contained in
/// the lower-cased input wins.
const RULES: &[(ContextCategory, &[&str])] = &[
    (ContextCategory::Debugging, &["debug", "error", "fix", "bug"]),
    (
        ContextCategory::CodeGeneration,
        &["code", "generate", "create", "write"],
    ),
    (ContextCategory::ApiHelp, &["api", "endpoint", "request"]),
    (ContextCategory::CliHelp, &["command", "cli", "terminal"]),
    (ContextCategory::Portfolio, &["portfolio", "resume", "cv"]),
];

/// Classifies free-text input into a [`ContextCategory`].
///
/// Matching is plain substring search on the lower-cased input, so `"bugfix"`
/// counts as debugging and `"terminals"` as CLI help. Input matching no rule is
/// [`ContextCategory::General`].
///
/// # Examples
///
/// ```
/// use tai_core::context::{classify, ContextCategory};
///
/// assert_eq!(classify("Debug my code: IndexError"), ContextCategory::Debugging);
/// assert_eq!(classify("Write a Python function"), ContextCategory::CodeGeneration);
/// assert_eq!(classify("hello there"), ContextCategory::General);
/// ```
pub fn classify(input: &str) -> ContextCategory {
    let lower = input.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(ContextCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_debugging_keywords() {
        for input in [
            "There is a bug in here",
            "I get an ERROR when starting",
            "please fix this",
            "Debug my code: IndexError",
        ] {
            assert_eq!(classify(input), ContextCategory::Debugging, "{input}");
        }
    }

    #[test]
    fn test_each_category() {
        assert_eq!(classify("Generate a sorting function"), ContextCategory::CodeGeneration);
        assert_eq!(classify("How do I call this endpoint?"), ContextCategory::ApiHelp);
        assert_eq!(classify("Which terminal command lists files?"), ContextCategory::CliHelp);
        assert_eq!(classify("Help me polish my resume"), ContextCategory::Portfolio);
    }

    #[test]
    fn test_no_keyword_is_general() {
        assert_eq!(classify(""), ContextCategory::General);
        assert_eq!(classify("What's the weather like?"), ContextCategory::General);
    }

    #[test]
    fn test_priority_order() {
        // "api" and "command" both present: API help outranks CLI help.
        assert_eq!(classify("api command"), ContextCategory::ApiHelp);
        // "write" outranks "resume".
        assert_eq!(classify("write my resume"), ContextCategory::CodeGeneration);
    }

    #[test]
    fn test_is_deterministic() {
        let input = "create an endpoint";
        assert_eq!(classify(input), classify(input));
    }

    #[test]
    fn test_wire_names_round_trip_through_strum() {
        for category in ContextCategory::iter() {
            let name = category.to_string();
            assert_eq!(ContextCategory::from_str(&name).unwrap(), category);
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{name}\"")
            );
        }
        assert_eq!(ContextCategory::CliHelp.as_ref(), "cli_help");
    }
}
