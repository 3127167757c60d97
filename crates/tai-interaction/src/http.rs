use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tai_core::error::{Result, TaiError};

/// Error body produced by the backend framework.
#[derive(Deserialize)]
struct ErrorResponse {
    detail: Value,
}

/// Posts `body` as JSON and returns the parsed JSON response.
///
/// Transport failures, non-2xx statuses and unparseable bodies are all
/// reported as errors.
pub(crate) async fn post_json<B>(client: &Client, url: &str, body: &B) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    tracing::debug!("[http] POST {}", url);

    let response = client
        .post(url)
        .header("content-type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|err| TaiError::http(None, format!("Request to {url} failed: {err}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        return Err(map_http_error(status, body_text));
    }

    response
        .json::<Value>()
        .await
        .map_err(|err| TaiError::serialization("JSON", format!("Invalid response body: {err}")))
}

fn map_http_error(status: StatusCode, body: String) -> TaiError {
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(ErrorResponse {
            detail: Value::String(detail),
        }) => detail,
        Ok(ErrorResponse { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        Err(_) => body,
    };

    TaiError::http(Some(status.as_u16()), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_extracted() {
        let err = map_http_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": "message is required"}"#.to_string(),
        );
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "HTTP error (422): message is required");
    }

    #[test]
    fn test_structured_detail_is_kept_as_json() {
        let err = map_http_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body"]}]}"#.to_string(),
        );
        assert!(err.to_string().contains(r#"[{"loc":["body"]}]"#));
    }

    #[test]
    fn test_plain_and_empty_bodies() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().ends_with("upstream down"));

        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, String::new());
        assert!(err.to_string().ends_with("Internal Server Error"));
    }
}
