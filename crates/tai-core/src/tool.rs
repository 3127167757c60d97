//! Developer tool forms.
//!
//! Each tool is a small form posted to its own endpoint that returns one text
//! result. A form type describes its payload, endpoint, response shape, how the
//! response is displayed and the text shown when the request fails.

use crate::error::{Result, TaiError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A tool request that can be posted to the backend.
pub trait ToolForm: Serialize + Send + Sync {
    /// Typed JSON response of the endpoint.
    type Response: DeserializeOwned + Send;

    /// Path of the endpoint, relative to the backend base URL.
    const ENDPOINT: &'static str;

    /// Text displayed in place of a result when the request fails.
    const FAILURE_MESSAGE: &'static str;

    /// Rejects forms with blank required fields. No request is made for an
    /// invalid form.
    fn validate(&self) -> Result<()>;

    /// The text displayed for a successful response.
    fn render(&self, response: Self::Response) -> String;
}

/// Something that can post a JSON payload to a tool endpoint.
#[async_trait]
pub trait ToolBackend: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value>;
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(TaiError::validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

// ============================================================================
// Code generation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeGenerationForm {
    pub description: String,
    pub programming_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}

impl CodeGenerationForm {
    pub fn new(description: impl Into<String>, programming_language: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            programming_language: programming_language.into(),
            framework: None,
        }
    }

    /// Sets the framework; blank values are treated as "no framework".
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        let framework = framework.into();
        self.framework = (!framework.trim().is_empty()).then_some(framework);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeGenerationResponse {
    pub generated_code: String,
    #[serde(default)]
    pub explanation: String,
}

impl ToolForm for CodeGenerationForm {
    type Response = CodeGenerationResponse;
    const ENDPOINT: &'static str = "/api/tools/generate-code";
    const FAILURE_MESSAGE: &'static str = "Failed to generate code. Please try again.";

    /// Besides the required fields, the language must be in
    /// [`PROGRAMMING_LANGUAGES`] and the framework, when set, must be one of
    /// [`frameworks_for`] that language.
    fn validate(&self) -> Result<()> {
        require("description", &self.description)?;
        require("programming_language", &self.programming_language)?;

        let language = self.programming_language.as_str();
        if !PROGRAMMING_LANGUAGES.contains(&language) {
            return Err(TaiError::validation(format!(
                "unsupported programming language '{language}'"
            )));
        }
        if let Some(framework) = self.framework.as_deref() {
            if !frameworks_for(language).contains(&framework) {
                return Err(TaiError::validation(format!(
                    "framework '{framework}' is not available for {language}"
                )));
            }
        }
        Ok(())
    }

    fn render(&self, response: Self::Response) -> String {
        format_code_result(
            &self.programming_language,
            &response.generated_code,
            &response.explanation,
        )
    }
}

/// Formats generated code as a fenced block followed by its explanation.
pub fn format_code_result(language: &str, code: &str, explanation: &str) -> String {
    let block = format!("```{}\n{}\n```", language, code.trim_end_matches('\n'));
    if explanation.trim().is_empty() {
        block
    } else {
        format!("{block}\n\n{explanation}")
    }
}

// ============================================================================
// Debugging
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugForm {
    pub code: String,
    pub error_message: String,
    pub language: String,
}

impl DebugForm {
    pub fn new(code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error_message: error_message.into(),
            language: "python".to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebugResponse {
    pub solution: String,
}

impl ToolForm for DebugForm {
    type Response = DebugResponse;
    const ENDPOINT: &'static str = "/api/tools/debug";
    const FAILURE_MESSAGE: &'static str = "Failed to generate debug solution. Please try again.";

    fn validate(&self) -> Result<()> {
        require("code", &self.code)?;
        require("error_message", &self.error_message)
    }

    fn render(&self, response: Self::Response) -> String {
        response.solution
    }
}

// ============================================================================
// API helper
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiHelperForm {
    pub description: String,
    pub api_type: String,
    pub method: String,
    pub framework: String,
}

impl ApiHelperForm {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            api_type: "rest".to_string(),
            method: "GET".to_string(),
            framework: "express".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiHelperResponse {
    pub api_code: String,
}

impl ToolForm for ApiHelperForm {
    type Response = ApiHelperResponse;
    const ENDPOINT: &'static str = "/api/tools/api-helper";
    const FAILURE_MESSAGE: &'static str = "Failed to generate API code. Please try again.";

    fn validate(&self) -> Result<()> {
        require("description", &self.description)
    }

    fn render(&self, response: Self::Response) -> String {
        response.api_code
    }
}

// ============================================================================
// CLI helper
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliHelperForm {
    pub task: String,
    pub platform: String,
    pub tool: String,
}

impl CliHelperForm {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            platform: "linux".to_string(),
            tool: "bash".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliHelperResponse {
    pub commands: String,
}

impl ToolForm for CliHelperForm {
    type Response = CliHelperResponse;
    const ENDPOINT: &'static str = "/api/tools/cli-helper";
    const FAILURE_MESSAGE: &'static str = "Failed to generate CLI commands. Please try again.";

    fn validate(&self) -> Result<()> {
        require("task", &self.task)
    }

    fn render(&self, response: Self::Response) -> String {
        response.commands
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Languages offered by the code generator.
pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "javascript", "typescript", "java", "cpp", "c", "csharp", "php", "ruby", "go",
    "rust", "swift", "kotlin", "scala", "html", "css",
];

/// Frameworks the code generator offers for a language. Unknown languages have
/// none.
pub fn frameworks_for(language: &str) -> &'static [&'static str] {
    match language {
        "python" => &["django", "flask", "fastapi", "pandas", "numpy", "tensorflow", "pytorch"],
        "javascript" => &["react", "vue", "angular", "express", "node", "next.js", "nuxt"],
        "typescript" => &["react", "vue", "angular", "nest", "express", "next.js"],
        "java" => &["spring", "hibernate", "maven", "gradle", "spring-boot"],
        "php" => &["laravel", "symfony", "codeigniter", "wordpress"],
        "ruby" => &["rails", "sinatra"],
        "go" => &["gin", "echo", "fiber", "gorilla"],
        "rust" => &["actix", "rocket", "warp"],
        "swift" => &["vapor", "perfect"],
        "kotlin" => &["spring", "ktor"],
        "csharp" => &["asp.net", "entity-framework", "blazor"],
        "css" => &["tailwind", "bootstrap", "sass", "styled-components"],
        "html" => &["html5", "bootstrap", "tailwind"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_generation_payload_omits_missing_framework() {
        let form = CodeGenerationForm::new("sort a list", "python").with_framework("  ");
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({"description": "sort a list", "programming_language": "python"})
        );

        let form = form.with_framework("fastapi");
        assert_eq!(serde_json::to_value(&form).unwrap()["framework"], "fastapi");
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        assert!(CodeGenerationForm::new("  ", "python").validate().unwrap_err().is_validation());
        assert!(DebugForm::new("x = 1", "").validate().is_err());
        assert!(DebugForm::new("", "NameError").validate().is_err());
        assert!(ApiHelperForm::new("\n").validate().is_err());
        assert!(CliHelperForm::new("").validate().is_err());

        assert!(DebugForm::new("x = y", "NameError").validate().is_ok());
        assert!(CliHelperForm::new("list files").validate().is_ok());
    }

    #[test]
    fn test_form_defaults() {
        let api = ApiHelperForm::new("users CRUD");
        assert_eq!((api.api_type.as_str(), api.method.as_str()), ("rest", "GET"));
        assert_eq!(api.framework, "express");

        let cli = CliHelperForm::new("find big files");
        assert_eq!((cli.platform.as_str(), cli.tool.as_str()), ("linux", "bash"));

        assert_eq!(DebugForm::new("a", "b").language, "python");
    }

    #[test]
    fn test_code_result_rendering() {
        let form = CodeGenerationForm::new("hello", "rust");
        let text = form.render(CodeGenerationResponse {
            generated_code: "fn main() {}\n".to_string(),
            explanation: "Prints nothing.".to_string(),
        });
        assert_eq!(text, "```rust\nfn main() {}\n```\n\nPrints nothing.");

        let bare = form.render(CodeGenerationResponse {
            generated_code: "fn main() {}".to_string(),
            explanation: String::new(),
        });
        assert_eq!(bare, "```rust\nfn main() {}\n```");
    }

    #[test]
    fn test_responses_parse_single_field() {
        let debug: DebugResponse = serde_json::from_value(json!({"solution": "add import"})).unwrap();
        assert_eq!(DebugForm::new("a", "b").render(debug), "add import");

        let code: CodeGenerationResponse =
            serde_json::from_value(json!({"generated_code": "x"})).unwrap();
        assert!(code.explanation.is_empty());
    }

    #[test]
    fn test_code_generation_checks_catalog() {
        assert!(CodeGenerationForm::new("api", "rust").validate().is_ok());
        assert!(
            CodeGenerationForm::new("api", "rust")
                .with_framework("actix")
                .validate()
                .is_ok()
        );

        let err = CodeGenerationForm::new("api", "cobol").validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("cobol"));

        let err = CodeGenerationForm::new("api", "rust")
            .with_framework("django")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("django"));
    }

    #[test]
    fn test_frameworks_catalog() {
        assert!(frameworks_for("rust").contains(&"actix"));
        assert!(frameworks_for("cobol").is_empty());
        assert!(PROGRAMMING_LANGUAGES.contains(&"go"));
    }
}
