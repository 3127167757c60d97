use anyhow::{Context, Result};
use std::path::Path;
use tai_application::export_portfolio;
use tai_core::portfolio::Portfolio;

/// Reads a portfolio TOML file and writes the HTML page into `out_dir`.
pub async fn export(input: &Path, out_dir: &Path) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let portfolio = Portfolio::from_toml(&source)
        .with_context(|| format!("Invalid portfolio file {}", input.display()))?;

    let path = export_portfolio(&portfolio, out_dir).await?;
    println!("Portfolio exported to {}", path.display());
    Ok(())
}
