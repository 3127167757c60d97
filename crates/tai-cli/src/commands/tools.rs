use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tai_application::{ToolOutcome, ToolUseCase};
use tai_core::TaiError;
use tai_core::config::TaiConfig;
use tai_core::render::code_blocks;
use tai_core::tool::{
    ApiHelperForm, CliHelperForm, CodeGenerationForm, DebugForm, PROGRAMMING_LANGUAGES,
    ToolForm, frameworks_for,
};
use tai_interaction::HttpToolClient;

async fn run<F: ToolForm>(config: &TaiConfig, form: &F) -> Result<ToolOutcome> {
    let tools = ToolUseCase::new(Arc::new(HttpToolClient::from_config(config)));
    Ok(tools.run(form).await?)
}

async fn submit<F: ToolForm>(config: &TaiConfig, form: F) -> Result<()> {
    println!("{}", run(config, &form).await?.text);
    Ok(())
}

/// Bodies of the fenced blocks in a result, separated by blank lines.
fn code_only(text: &str) -> String {
    code_blocks(text)
        .into_iter()
        .map(|block| block.body)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub async fn code(
    config: &TaiConfig,
    description: String,
    language: String,
    framework: Option<String>,
    raw: bool,
) -> Result<()> {
    let mut form = CodeGenerationForm::new(description, language);
    if let Some(framework) = framework {
        form = form.with_framework(framework);
    }

    let outcome = run(config, &form).await?;
    if raw && outcome.succeeded {
        println!("{}", code_only(&outcome.text));
    } else {
        println!("{}", outcome.text);
    }
    Ok(())
}

/// Prints the code generator's language catalog.
pub fn languages(language: Option<&str>) -> Result<()> {
    match language {
        Some(language) => {
            if !PROGRAMMING_LANGUAGES.contains(&language) {
                return Err(TaiError::not_found("language", language).into());
            }
            for framework in frameworks_for(language) {
                println!("{}", framework);
            }
        }
        None => {
            for language in PROGRAMMING_LANGUAGES {
                println!("{:<12} {}", language, frameworks_for(language).join(", "));
            }
        }
    }
    Ok(())
}

pub async fn debug(
    config: &TaiConfig,
    error: String,
    code: Option<String>,
    file: Option<PathBuf>,
    language: String,
) -> Result<()> {
    let code = match (code, file) {
        (Some(code), _) => code,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("either --code or --file is required"),
    };
    submit(config, DebugForm::new(code, error).with_language(language)).await
}

pub async fn api(
    config: &TaiConfig,
    description: String,
    api_type: String,
    method: String,
    framework: String,
) -> Result<()> {
    let form = ApiHelperForm {
        description,
        api_type,
        method,
        framework,
    };
    submit(config, form).await
}

pub async fn cli(config: &TaiConfig, task: String, platform: String, tool: String) -> Result<()> {
    let form = CliHelperForm {
        task,
        platform,
        tool,
    };
    submit(config, form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_only_strips_explanation() {
        let text = "```python\nprint(1)\n```\n\nPrints one.";
        assert_eq!(code_only(text), "print(1)");
    }

    #[test]
    fn test_code_only_joins_blocks() {
        let text = "```sh\nls\n```\nthen\n```sh\npwd\n```";
        assert_eq!(code_only(text), "ls\n\npwd");
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(languages(Some("cobol")).is_err());
        assert!(languages(Some("rust")).is_ok());
    }
}
