use serde_json::Value;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const GENERATE_CONTENT_PATH: &str = "/models/gemini-2.5-pro:generateContent";

pub async fn setup_generate_content_mock(status: u16, body: impl Into<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body.into()))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_then_success_mocks(error: Value, success: Value) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(error))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(GENERATE_CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success))
        .mount(&mock_server)
        .await;

    mock_server
}
