use super::*;

#[test]
fn document_file_url_formats_expected_path() {
    assert_eq!(
        document_file_url("1a2b3c4d-0000-0000-0000-000000000001"),
        "/api/documents/1a2b3c4d-0000-0000-0000-000000000001/file"
    );
}

#[test]
fn document_endpoint_formats_expected_path() {
    assert_eq!(document_endpoint("d1"), "/api/documents/d1");
}

#[test]
fn failed_message_formats_operation_and_status() {
    assert_eq!(failed_message("chat request", 502), "chat request failed: 502");
    assert_eq!(failed_message("profile update", 422), "profile update failed: 422");
}

#[test]
fn chat_payload_wraps_message() {
    assert_eq!(chat_payload("What is on page 3?"), serde_json::json!({ "message": "What is on page 3?" }));
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::super::*;
    use crate::net::types::ProfileUpdate;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        use std::task::{Context, Poll, Waker};
        let mut future = std::pin::pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn current_user_is_none_outside_browser() {
        assert_eq!(block_on(fetch_current_user()), None);
    }

    #[test]
    fn calls_report_unavailable_outside_browser() {
        assert_eq!(block_on(send_chat_message("hi")), Err("not available on server".to_owned()));
        assert_eq!(block_on(fetch_documents()), Err("not available on server".to_owned()));
        assert_eq!(block_on(delete_document("d1")), Err("not available on server".to_owned()));
        let update = ProfileUpdate { name: "Ada".to_owned() };
        assert_eq!(block_on(update_profile(&update)), Err("not available on server".to_owned()));
    }
}
