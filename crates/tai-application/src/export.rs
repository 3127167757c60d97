//! Writing chat transcripts and portfolios to disk.

use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tai_core::error::Result;
use tai_core::portfolio::{self, Portfolio};
use tai_core::session::SessionStore;
use tokio::fs;

/// `tai-chat-YYYY-MM-DD.txt`
pub fn transcript_file_name(date: NaiveDate) -> String {
    format!("tai-chat-{}.txt", date.format("%Y-%m-%d"))
}

/// Writes the session transcript into `dir`, named after today's UTC date.
/// Returns the written path.
pub async fn export_chat(store: &SessionStore, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(transcript_file_name(Utc::now().date_naive()));
    write_file(&path, &store.transcript()).await?;

    tracing::info!("[Export] Chat transcript written to {}", path.display());
    Ok(path)
}

/// Renders the portfolio and writes it into `dir`. Returns the written path.
pub async fn export_portfolio(portfolio: &Portfolio, dir: &Path) -> Result<PathBuf> {
    let html = portfolio::render_html(portfolio)?;
    let path = dir.join(portfolio::file_name(portfolio));
    write_file(&path, &html).await?;

    tracing::info!("[Export] Portfolio written to {}", path.display());
    Ok(path)
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, content).await?;
    Ok(())
}
