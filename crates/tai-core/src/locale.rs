//! User-facing strings in the supported languages.

use crate::context::ContextCategory;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Display language for assistant copy.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sw,
}

/// A canned prompt that front ends offer as a quick start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplePrompt {
    pub text: &'static str,
    /// Feature the prompt demonstrates (not necessarily a [`ContextCategory`]).
    pub category: &'static str,
}

struct WelcomeText {
    greeting: &'static str,
    /// Section heading and its bullet points.
    sections: [(&'static str, &'static [&'static str]); 3],
    question: &'static str,
}

const WELCOME_EN: WelcomeText = WelcomeText {
    greeting: "Hi! I'm TAI, your intelligent AI assistant.",
    sections: [
        (
            "Core Features:",
            &[
                "Code Generation - Write code in any language",
                "Debugging - Find and fix bugs instantly",
                "API Help - Learn about any API",
                "CLI Commands - Master command-line tools",
                "Portfolio Building - Create stunning resumes",
            ],
        ),
        (
            "Content & Writing:",
            &[
                "Blog Writing - Generate engaging articles",
                "Email Writing - Craft professional emails",
                "Text Summarization - Condense long content",
                "Translation - Translate to any language",
            ],
        ),
        ("Personal Assistant:", &["To-Do Lists - Organize your tasks"]),
    ],
    question: "What can I help you with today?",
};

const WELCOME_SW: WelcomeText = WelcomeText {
    greeting: "Habari! Mimi ni TAI, msaidizi wako mahiri wa AI.",
    sections: [
        (
            "Vipengele Vikuu:",
            &[
                "Kutengeneza Msimbo - Andika msimbo kwa lugha yoyote",
                "Kurekebisha - Tafuta na urekebishe hitilafu haraka",
                "Msaada wa API - Jifunze kuhusu API yoyote",
                "Amri za CLI - Bingwa wa zana za mstari wa amri",
                "Kujenga Portfolio - Unda CV nzuri",
            ],
        ),
        (
            "Maudhui na Uandishi:",
            &[
                "Kuandika Makala - Tengeneza makala za kuvutia",
                "Kuandika Barua Pepe - Unda barua pepe za kitaaluma",
                "Muhtasari wa Maandishi - Punguza maudhui marefu",
                "Tafsiri - Tafsiri kwa lugha yoyote",
            ],
        ),
        ("Msaidizi Binafsi:", &["Orodha za Kufanya - Panga kazi zako"]),
    ],
    question: "Ninaweza kukusaidia vipi leo?",
};

/// The seeded assistant message shown at the start of every session.
pub fn welcome_message(language: Language) -> String {
    let text = match language {
        Language::En => &WELCOME_EN,
        Language::Sw => &WELCOME_SW,
    };

    let mut message = format!("{}\n\n", text.greeting);
    for (heading, items) in text.sections {
        message.push_str(&format!("**{heading}**\n"));
        for item in items {
            message.push_str(&format!("• {item}\n"));
        }
        message.push('\n');
    }
    message.push_str(text.question);
    message
}

/// Human-readable label for a context category.
pub fn category_label(category: ContextCategory, language: Language) -> &'static str {
    match (category, language) {
        (ContextCategory::CodeGeneration, Language::En) => "Code Generation",
        (ContextCategory::CodeGeneration, Language::Sw) => "Kutengeneza Msimbo",
        (ContextCategory::Debugging, Language::En) => "Debugging",
        (ContextCategory::Debugging, Language::Sw) => "Kurekebisha",
        (ContextCategory::ApiHelp, Language::En) => "API Help",
        (ContextCategory::ApiHelp, Language::Sw) => "Msaada wa API",
        (ContextCategory::CliHelp, Language::En) => "CLI Help",
        (ContextCategory::CliHelp, Language::Sw) => "Msaada wa CLI",
        (ContextCategory::Portfolio, _) => "Portfolio",
        (ContextCategory::General, Language::En) => "General",
        (ContextCategory::General, Language::Sw) => "Jumla",
    }
}

/// Quick-start prompts for the given language.
pub fn example_prompts(language: Language) -> [ExamplePrompt; 4] {
    match language {
        Language::En => [
            ExamplePrompt {
                text: "Write a Python function to sort a list",
                category: "code_generation",
            },
            ExamplePrompt {
                text: "Debug my JavaScript error",
                category: "debugging",
            },
            ExamplePrompt {
                text: "Write a professional email",
                category: "email",
            },
            ExamplePrompt {
                text: "Translate this to Spanish",
                category: "translate",
            },
        ],
        Language::Sw => [
            ExamplePrompt {
                text: "Andika function ya Python kusafisha orodha",
                category: "code_generation",
            },
            ExamplePrompt {
                text: "Rekebisha hitilafu yangu ya JavaScript",
                category: "debugging",
            },
            ExamplePrompt {
                text: "Andika barua pepe ya kitaaluma",
                category: "email",
            },
            ExamplePrompt {
                text: "Tafsiri hii kwa Kihispania",
                category: "translate",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_welcome_message_differs_by_language() {
        let en = welcome_message(Language::En);
        let sw = welcome_message(Language::Sw);

        assert!(en.starts_with("Hi! I'm TAI"));
        assert!(sw.starts_with("Habari!"));
        assert!(en.contains("**Core Features:**"));
        assert_ne!(en, sw);
    }

    #[test]
    fn test_welcome_message_layout_matches_across_languages() {
        let en = welcome_message(Language::En);
        let sw = welcome_message(Language::Sw);

        for text in [&en, &sw] {
            assert_eq!(text.matches("\n• ").count(), 10);
            assert_eq!(text.matches("**").count(), 6);
            assert!(!text.ends_with('\n'));
        }
        assert!(en.contains("**Personal Assistant:**\n• To-Do Lists - Organize your tasks\n\n"));
        assert!(sw.ends_with("Ninaweza kukusaidia vipi leo?"));
    }

    #[test]
    fn test_every_category_has_labels() {
        for category in ContextCategory::iter() {
            for language in Language::iter() {
                assert!(!category_label(category, language).is_empty());
            }
        }
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(Language::from_str("sw").unwrap(), Language::Sw);
        assert!(Language::from_str("fr").is_err());
        assert_eq!(Language::default(), Language::En);
    }
}
