use std::sync::{Arc, Mutex};

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use menulens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};

type Captured = Arc<Mutex<Vec<Value>>>;

/// Starts an OpenAI-compatible provider on a random port that always answers
/// with `status` and `body`, recording every request it receives.
async fn spawn_provider(status: StatusCode, body: Value) -> (String, Captured) {
    let captured: Captured = Arc::default();
    let requests = captured.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |Json(request): Json<Value>| {
            let body = body.clone();
            let requests = requests.clone();
            async move {
                requests.lock().unwrap().push(request);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), captured)
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn test_server(provider_url: &str) -> TestServer {
    let args = Args::try_parse_from([
        "menulens",
        "--llm-api-key",
        "sk-test",
        "--llm-base-url",
        provider_url,
        "--llm-timeout-secs",
        "5",
        "--object-storage-access-key",
        "minio",
        "--object-storage-secret-key",
        "minio123",
        "--object-storage-public-url",
        "https://cdn.example.com",
    ])
    .unwrap();

    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

async fn server_answering(content: &str) -> (TestServer, Captured) {
    let (url, captured) = spawn_provider(StatusCode::OK, completion(content)).await;
    (test_server(&url), captured)
}

#[tokio::test]
async fn analyzes_prose_wrapped_menu() {
    let (server, captured) = server_answering(
        "Here is the analysis:\n[{\"name\":\"Caesar Salad\",\"description\":\"Romaine, parmesan, croutons\",\"fodmapLevel\":\"moderate\",\"concerns\":[\"Garlic\"],\"alternatives\":[\"No dressing\"]}]\nLet me know if you need more.",
    )
    .await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/lunch.jpg"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["image_url"], "https://cdn.example.com/menus/lunch.jpg");
    assert_eq!(
        body["data"]["dishes"],
        json!([{
            "name": "Caesar Salad",
            "description": "Romaine, parmesan, croutons",
            "fodmapLevel": "moderate",
            "concerns": ["Garlic"],
            "alternatives": ["No dressing"]
        }])
    );

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["max_tokens"], 2000);
    assert_eq!(
        requests[0]["messages"][0]["content"][1]["image_url"]["url"],
        "https://cdn.example.com/menus/lunch.jpg"
    );
}

#[tokio::test]
async fn empty_array_is_an_empty_menu() {
    let (server, _) = server_answering("[]").await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/blank.jpg"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["dishes"], json!([]));
}

#[tokio::test]
async fn refusal_is_reported_as_no_json_found() {
    let (server, _) = server_answering("I cannot analyze this image.").await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/cat.jpg"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "no_json_found");
    assert!(body.get("raw_response").is_none());
}

#[tokio::test]
async fn truncated_completion_carries_raw_text() {
    let (server, _) = server_answering("[{\"name\":\"Soup\"").await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/long.jpg"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], "malformed_json");
    assert_eq!(body["raw_response"], "[{\"name\":\"Soup\"");
}

#[tokio::test]
async fn blank_completion_is_empty_completion() {
    let (server, _) = server_answering("   ").await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/lunch.jpg"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "empty_completion");
}

#[tokio::test]
async fn choice_without_message_is_empty_completion() {
    let (url, _) = spawn_provider(
        StatusCode::OK,
        json!({"choices": [{"index": 0, "finish_reason": "length"}]}),
    )
    .await;
    let server = test_server(&url);

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/lunch.jpg"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "empty_completion");
}

#[tokio::test]
async fn provider_error_is_transport_failure() {
    let (url, _) = spawn_provider(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "Rate limit reached", "type": "requests"}}),
    )
    .await;
    let server = test_server(&url);

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/lunch.jpg"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "transport_failure");
}

#[tokio::test]
async fn unreachable_provider_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let server = test_server(&format!("http://{addr}/v1"));

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": "https://cdn.example.com/menus/lunch.jpg"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "transport_failure");
}

#[tokio::test]
async fn invalid_image_url_is_rejected_before_inference() {
    let (server, captured) = server_answering("[]").await;

    let response = server
        .post("/menu-analysis")
        .json(&json!({"image_url": ""}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "validation_error");
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let (server, captured) = server_answering("[]").await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"just text".to_vec())
            .file_name("menu.txt")
            .mime_type("text/plain"),
    );

    let response = server.post("/menu-analysis/upload").multipart(form).await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn upload_without_file_field_is_bad_request() {
    let (server, _) = server_answering("[]").await;

    let form = MultipartForm::new().add_text("note", "no file here");

    let response = server.post("/files/upload").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn health_and_config_are_served() {
    let (server, _) = server_answering("[]").await;

    server.get("/health").await.assert_json(&json!({"status": "ok"}));

    let response = server.get("/config").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["max_tokens"], 2000);
}
