//! Message rendering.
//!
//! Turns assistant output into structured display segments: fenced code
//! blocks with their language tag, and prose split into plain, inline-code and
//! bold spans. Rendering is a pure text transform; front ends decide how each
//! segment looks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Language label used for fenced blocks without a tag.
pub const DEFAULT_CODE_LANGUAGE: &str = "plaintext";

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("fenced block pattern is valid"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("inline code pattern is valid"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("bold pattern is valid"));

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: String,
    pub body: String,
}

/// A run of prose inside a text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    InlineCode(String),
    Bold(String),
}

/// One display segment of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Code(CodeBlock),
    Text(Vec<Span>),
}

impl Segment {
    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code(_))
    }
}

/// Splits message text into display segments, in order.
///
/// # Examples
///
/// ```
/// use tai_core::render::{render, CodeBlock, Segment};
///
/// let segments = render("```python\nprint(1)\n```");
/// assert_eq!(
///     segments,
///     vec![Segment::Code(CodeBlock {
///         language: "python".to_string(),
///         body: "print(1)".to_string(),
///     })]
/// );
/// ```
pub fn render(text: &str) -> Vec<Segment> {
    split_on(&FENCED_BLOCK, text)
        .into_iter()
        .filter_map(|(is_fence, part)| {
            if is_fence {
                Some(Segment::Code(parse_fence(part)))
            } else {
                let spans = render_spans(part);
                (!spans.is_empty()).then_some(Segment::Text(spans))
            }
        })
        .collect()
}

/// All fenced code blocks in the text, for copy affordances.
pub fn code_blocks(text: &str) -> Vec<CodeBlock> {
    render(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Code(block) => Some(block),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Splits prose into inline code first, then bold within what remains.
fn render_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();

    for (is_code, part) in split_on(&INLINE_CODE, text) {
        if is_code {
            spans.push(Span::InlineCode(strip_delimiters(part, 1).to_string()));
            continue;
        }
        for (is_bold, piece) in split_on(&BOLD, part) {
            if is_bold {
                spans.push(Span::Bold(strip_delimiters(piece, 2).to_string()));
            } else if !piece.is_empty() {
                spans.push(Span::Plain(piece.to_string()));
            }
        }
    }

    spans
}

fn parse_fence(raw: &str) -> CodeBlock {
    let inner = strip_delimiters(raw, 3);

    match inner.split_once('\n') {
        Some((header, rest)) => {
            let language = header.trim();
            let body = rest.strip_suffix('\n').unwrap_or(rest);
            let body = body.strip_suffix('\r').unwrap_or(body);
            CodeBlock {
                language: if language.is_empty() {
                    DEFAULT_CODE_LANGUAGE.to_string()
                } else {
                    language.to_string()
                },
                body: body.to_string(),
            }
        }
        None => CodeBlock {
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            body: inner.to_string(),
        },
    }
}

/// Removes `width` delimiter bytes from both ends. Callers only pass matches
/// of the patterns above, whose delimiters are ASCII.
fn strip_delimiters(matched: &str, width: usize) -> &str {
    &matched[width..matched.len() - width]
}

/// Splits `text` into alternating unmatched / matched parts. The flag is
/// `true` for matched parts.
fn split_on<'a>(pattern: &Regex, text: &'a str) -> Vec<(bool, &'a str)> {
    let mut parts = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            parts.push((false, &text[cursor..found.start()]));
        }
        parts.push((true, found.as_str()));
        cursor = found.end();
    }
    if cursor < text.len() {
        parts.push((false, &text[cursor..]));
    }

    parts
}
