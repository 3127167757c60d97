//! Tool form submission.

use std::sync::Arc;
use tai_core::error::{Result, TaiError};
use tai_core::tool::{ToolBackend, ToolForm};

/// Text to display for a submitted tool form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub text: String,
    /// `false` when `text` is the form's failure message.
    pub succeeded: bool,
}

pub struct ToolUseCase<T: ToolBackend> {
    backend: Arc<T>,
}

impl<T: ToolBackend> ToolUseCase<T> {
    pub fn new(backend: Arc<T>) -> Self {
        Self { backend }
    }

    /// Validates and submits a form.
    ///
    /// Only validation errors are returned; request and response failures
    /// are logged and replaced by the form's failure message.
    pub async fn run<F: ToolForm>(&self, form: &F) -> Result<ToolOutcome> {
        form.validate()?;
        let payload = serde_json::to_value(form)?;

        let response = self
            .backend
            .post_json(F::ENDPOINT, payload)
            .await
            .and_then(|value| serde_json::from_value::<F::Response>(value).map_err(TaiError::from));

        Ok(match response {
            Ok(response) => ToolOutcome {
                text: form.render(response),
                succeeded: true,
            },
            Err(e) => {
                tracing::error!("[ToolUseCase] {} failed: {}", F::ENDPOINT, e);
                ToolOutcome {
                    text: F::FAILURE_MESSAGE.to_string(),
                    succeeded: false,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tai_core::tool::{ApiHelperForm, CliHelperForm, CodeGenerationForm, DebugForm};

    struct MockToolBackend {
        response: Result<Value>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl MockToolBackend {
        fn new(response: Result<Value>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolBackend for MockToolBackend {
        async fn post_json(&self, endpoint: &str, payload: Value) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), payload));
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_code_generation_success() {
        let backend = MockToolBackend::new(Ok(json!({
            "generated_code": "def add(a, b):\n    return a + b",
            "explanation": "Adds two numbers."
        })));
        let tools = ToolUseCase::new(backend.clone());

        let outcome = tools
            .run(&CodeGenerationForm::new("add two numbers", "python"))
            .await
            .unwrap();

        assert!(outcome.succeeded);
        assert_eq!(
            outcome.text,
            "```python\ndef add(a, b):\n    return a + b\n```\n\nAdds two numbers."
        );
        let calls = backend.calls();
        assert_eq!(calls[0].0, "/api/tools/generate-code");
        assert_eq!(calls[0].1["programming_language"], "python");
    }

    #[tokio::test]
    async fn test_backend_failure_yields_failure_message() {
        let backend = MockToolBackend::new(Err(TaiError::http(Some(500), "boom")));
        let tools = ToolUseCase::new(backend);

        let outcome = tools.run(&DebugForm::new("x", "NameError")).await.unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.text, "Failed to generate debug solution. Please try again.");

        let outcome = tools.run(&ApiHelperForm::new("users")).await.unwrap();
        assert_eq!(outcome.text, "Failed to generate API code. Please try again.");
    }

    #[tokio::test]
    async fn test_unexpected_response_shape_yields_failure_message() {
        let backend = MockToolBackend::new(Ok(json!({"result": "ls"})));
        let tools = ToolUseCase::new(backend);

        let outcome = tools.run(&CliHelperForm::new("list files")).await.unwrap();
        assert!(!outcome.succeeded);
        assert_eq!(outcome.text, "Failed to generate CLI commands. Please try again.");
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let backend = MockToolBackend::new(Ok(json!({"commands": "ls"})));
        let tools = ToolUseCase::new(backend.clone());

        let err = tools.run(&CliHelperForm::new("  ")).await.unwrap_err();
        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
    }
}
