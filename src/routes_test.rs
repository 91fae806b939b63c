use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as header_eq, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::{BackendTimeouts, ServerConfig};

fn state(backend_url: Option<String>) -> AppState {
    let config = ServerConfig {
        port: 0,
        backend_url,
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 5 },
        log_filter: "info".to_owned(),
    };
    AppState::new(&config).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_is_ok() {
    let response = api_routes(state(None))
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_without_backend_answers_service_unavailable() {
    let response = api_routes(state(None))
        .oneshot(Request::get("/api/documents").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(response).await, r#"{"error":"backend not configured"}"#);
}

#[tokio::test]
async fn chat_request_round_trips_through_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header_eq("cookie", "session=abc"))
        .and(body_json(serde_json::json!({ "message": "What is on page 3?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .insert_header("x-backend-internal", "1")
                .set_body_string(r#"{"content":"See [PDF: ab-12, Page: 3]"}"#),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let request = Request::post("/api/chat")
        .header(header::COOKIE, "session=abc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"message":"What is on page 3?"}"#))
        .unwrap();
    let response = api_routes(state(Some(backend.uri()))).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert!(response.headers().get("x-backend-internal").is_none());
    assert_eq!(body_string(response).await, r#"{"content":"See [PDF: ab-12, Page: 3]"}"#);
}

#[tokio::test]
async fn backend_status_is_passed_through() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/d1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&backend)
        .await;

    let request = Request::delete("/api/documents/d1").body(Body::empty()).unwrap();
    let response = api_routes(state(Some(backend.uri()))).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oauth_redirect_reaches_browser_with_cookie() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/github/callback"))
        .and(query_param("code", "xyz"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/")
                .insert_header("set-cookie", "session=new; HttpOnly; Path=/"),
        )
        .mount(&backend)
        .await;

    let request = Request::get("/auth/github/callback?code=xyz").body(Body::empty()).unwrap();
    let response = api_routes(state(Some(backend.uri()))).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(response.headers()[header::SET_COOKIE], "session=new; HttpOnly; Path=/");
}
