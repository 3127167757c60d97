use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tai_core::config::TaiConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tai")]
#[command(about = "TAI - AI assistant for code, debugging, APIs and the command line", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config file and TAI_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the assistant a single question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Generate code from a description
    Code {
        description: String,
        #[arg(short, long, default_value = "python")]
        language: String,
        #[arg(short, long)]
        framework: Option<String>,
        /// Print only the generated code, without the explanation
        #[arg(long)]
        raw: bool,
    },
    /// List the languages and frameworks accepted by `code`
    Languages {
        /// Only show frameworks for this language
        language: Option<String>,
    },
    /// Suggest a fix for failing code
    Debug {
        /// Error message produced by the code
        #[arg(short, long)]
        error: String,
        /// Code snippet
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        code: Option<String>,
        /// Read the code from a file
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(short, long, default_value = "python")]
        language: String,
    },
    /// Generate API code
    Api {
        description: String,
        #[arg(long, default_value = "rest")]
        api_type: String,
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[arg(short, long, default_value = "express")]
        framework: String,
    },
    /// Generate shell commands for a task
    Cli {
        task: String,
        #[arg(short, long, default_value = "linux")]
        platform: String,
        #[arg(short, long, default_value = "bash")]
        tool: String,
    },
    /// List built-in code templates, or print one
    Templates {
        /// Language to list templates for
        language: Option<String>,
        /// Template name to print
        #[arg(short, long, requires = "language")]
        name: Option<String>,
    },
    /// Export a portfolio described in a TOML file as HTML
    Portfolio {
        input: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = TaiConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }
    tracing::debug!("[tai] Backend: {}", config.api_base_url);

    match cli.command {
        Commands::Ask { message } => commands::ask::run(&config, &message.join(" ")).await?,
        Commands::Code {
            description,
            language,
            framework,
            raw,
        } => commands::tools::code(&config, description, language, framework, raw).await?,
        Commands::Languages { language } => commands::tools::languages(language.as_deref())?,
        Commands::Debug {
            error,
            code,
            file,
            language,
        } => commands::tools::debug(&config, error, code, file, language).await?,
        Commands::Api {
            description,
            api_type,
            method,
            framework,
        } => commands::tools::api(&config, description, api_type, method, framework).await?,
        Commands::Cli {
            task,
            platform,
            tool,
        } => commands::tools::cli(&config, task, platform, tool).await?,
        Commands::Templates { language, name } => {
            commands::templates::run(language.as_deref(), name.as_deref())?
        }
        Commands::Portfolio { input, out } => commands::portfolio::export(&input, &out).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_debug_requires_code_or_file() {
        assert!(Cli::try_parse_from(["tai", "debug", "--error", "boom"]).is_err());
        assert!(Cli::try_parse_from(["tai", "debug", "-e", "boom", "-c", "x = y"]).is_ok());
        assert!(
            Cli::try_parse_from(["tai", "debug", "-e", "boom", "-c", "x", "--file", "a.py"])
                .is_err()
        );
    }

    #[test]
    fn test_code_raw_flag() {
        let cli = Cli::try_parse_from(["tai", "code", "sort users", "-l", "go", "--raw"]).unwrap();
        match cli.command {
            Commands::Code { language, raw, .. } => {
                assert_eq!(language, "go");
                assert!(raw);
            }
            _ => panic!("expected code"),
        }
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["tai", "ask", "fix", "my", "bug"]).unwrap();
        match cli.command {
            Commands::Ask { message } => assert_eq!(message.join(" "), "fix my bug"),
            _ => panic!("expected ask"),
        }
    }
}
