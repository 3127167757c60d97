use serde_json::json;
use tai_core::tool::{DebugForm, ToolBackend, ToolForm};
use tai_interaction::HttpToolClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_form_to_its_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tools/debug"))
        .and(body_json(json!({
            "code": "print(x)",
            "error_message": "NameError: name 'x' is not defined",
            "language": "python"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"solution": "Define x first."})))
        .expect(1)
        .mount(&server)
        .await;

    let form = DebugForm::new("print(x)", "NameError: name 'x' is not defined");
    let client = HttpToolClient::new(server.uri());
    let value = client
        .post_json(DebugForm::ENDPOINT, serde_json::to_value(&form).unwrap())
        .await
        .unwrap();

    assert_eq!(value, json!({"solution": "Define x first."}));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tools/cli-helper"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = HttpToolClient::new(server.uri())
        .post_json("/api/tools/cli-helper", json!({"task": "x"}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}
