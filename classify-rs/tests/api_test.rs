use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use classify_rs::{ApiServer, AppState, ClassifierError, CountVectorizer, KeywordClassifier};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_server() -> ApiServer {
    server_on("127.0.0.1:0")
}

fn server_on(addr: &str) -> ApiServer {
    let state = AppState::new(
        Arc::new(KeywordClassifier::default()),
        Arc::new(CountVectorizer::seeded()),
    );
    ApiServer::new(state, addr.to_string())
}

fn test_router() -> Router {
    test_server().router()
}

async fn post_classify(router: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn classify_content(content: &str) -> Value {
    let (status, body) = post_classify(test_router(), &json!({ "content": content }).to_string()).await;
    assert_eq!(status, StatusCode::OK, "content: {:?}", content);
    body
}

#[tokio::test]
async fn test_classify_spam_mixed_case() {
    let body = classify_content("Buy Now and win a FREE prize!").await;
    assert_eq!(body, json!({ "prediction": "spam", "confidence": 0.85 }));
}

#[tokio::test]
async fn test_classify_ham() {
    let body = classify_content("Let's meet for lunch tomorrow").await;
    assert_eq!(body, json!({ "prediction": "ham", "confidence": 0.92 }));
}

#[tokio::test]
async fn test_classify_lottery_winner() {
    let body = classify_content("You are a LOTTERY winner").await;
    assert_eq!(body, json!({ "prediction": "spam", "confidence": 0.85 }));
}

#[tokio::test]
async fn test_classify_empty_content() {
    let body = classify_content("").await;
    assert_eq!(body, json!({ "prediction": "ham", "confidence": 0.92 }));
}

#[tokio::test]
async fn test_classify_is_idempotent() {
    let first = classify_content("Huge DISCOUNT on viagra").await;
    let second = classify_content("Huge DISCOUNT on viagra").await;
    assert_eq!(first, second);
    assert_eq!(first["prediction"], "spam");
}

#[tokio::test]
async fn test_missing_content_rejected() {
    let (status, body) = post_classify(test_router(), r#"{"text": "hello"}"#).await;
    assert!(status.is_client_error(), "status: {}", status);
    assert_eq!(body["error"], "invalid_request");
    assert!(body["detail"].as_str().unwrap().contains("content"));
}

#[tokio::test]
async fn test_non_string_content_rejected() {
    let (status, body) = post_classify(test_router(), r#"{"content": 42}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = post_classify(test_router(), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_body_without_content_type_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .body(Body::from(r#"{"content": "free lunch"}"#))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "prediction": "spam", "confidence": 0.85 }));
}

#[tokio::test]
async fn test_non_json_content_type_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"content": "hello"}"#))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["classifier"], "keyword-v1");
}

#[tokio::test]
async fn test_cors_credentials_from_any_origin() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/classify")
        .header(header::ORIGIN, "https://anywhere.example")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "session=abc")
        .body(Body::from(r#"{"content": "free stuff"}"#))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://anywhere.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_preflight_any_method_and_header() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/classify")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "PUT");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-header");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

/// Test the classify endpoint over a real socket
#[tokio::test]
async fn test_classify_over_http() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = test_server();

    tokio::spawn(async move { server.serve(listener).await });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/classify", addr))
        .json(&json!({ "content": "Claim your discount today" }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success(), "Classification should succeed");

    let body: Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body["prediction"], "spam");
    assert_eq!(body["confidence"], 0.85);
}

/// Binding an address that is already taken reports an IO error
#[tokio::test]
async fn test_run_on_taken_address() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let result = server_on(&addr.to_string()).run().await;
    assert!(matches!(result, Err(ClassifierError::Io(_))), "result: {:?}", result);
}
