use super::*;
use crate::config::BackendTimeouts;

fn config(backend_url: Option<&str>) -> ServerConfig {
    ServerConfig {
        port: 3000,
        backend_url: backend_url.map(str::to_owned),
        timeouts: BackendTimeouts { request_secs: 60, connect_secs: 10 },
        log_filter: "info".to_owned(),
    }
}

#[test]
fn state_without_backend_disables_forwarding() {
    let state = AppState::new(&config(None)).unwrap();
    assert!(!state.backend_configured());
    assert!(state.backend_url.is_none());
}

#[test]
fn state_keeps_backend_url() {
    let state = AppState::new(&config(Some("https://backend.test"))).unwrap();
    assert!(state.backend_configured());
    assert_eq!(state.backend_url.as_deref(), Some("https://backend.test"));
}

#[test]
fn clones_share_backend_url() {
    let state = AppState::new(&config(Some("http://b"))).unwrap();
    let clone = state.clone();
    assert!(Arc::ptr_eq(state.backend_url.as_ref().unwrap(), clone.backend_url.as_ref().unwrap()));
}
