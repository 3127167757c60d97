use super::model::Portfolio;
use crate::error::Result;
use minijinja::Environment;
use once_cell::sync::Lazy;
use regex::Regex;

const TEMPLATE_NAME: &str = "portfolio.html";
const TEMPLATE_SOURCE: &str = include_str!("portfolio.html");

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Renders the portfolio as a standalone HTML document.
///
/// Field values are HTML-escaped.
pub fn render_html(portfolio: &Portfolio) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;

    let html = env.get_template(TEMPLATE_NAME)?.render(portfolio)?;
    tracing::debug!(
        "[Portfolio] Rendered {} bytes for '{}'",
        html.len(),
        portfolio.personal_info.full_name
    );
    Ok(html)
}

/// Download file name: the full name with whitespace runs replaced by `_`.
///
/// # Examples
///
/// ```
/// use tai_core::portfolio::{file_name, Portfolio};
///
/// let mut portfolio = Portfolio::new();
/// portfolio.personal_info.full_name = "Ada  King Lovelace".to_string();
/// assert_eq!(file_name(&portfolio), "Ada_King_Lovelace_Portfolio.html");
/// ```
pub fn file_name(portfolio: &Portfolio) -> String {
    let name = WHITESPACE_RUN.replace_all(&portfolio.personal_info.full_name, "_");
    format!("{name}_Portfolio.html")
}
