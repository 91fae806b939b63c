use super::*;

#[test]
fn status_maps_each_variant() {
    assert_eq!(ProxyError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::InvalidRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn display_includes_details() {
    assert_eq!(ProxyError::BodyTooLarge { limit: 10 }.to_string(), "request body exceeds 10 bytes");
    assert_eq!(ProxyError::Upstream("refused".into()).to_string(), "backend request failed: refused");
}

#[test]
fn into_response_uses_variant_status() {
    let response = ProxyError::NotConfigured.into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}
