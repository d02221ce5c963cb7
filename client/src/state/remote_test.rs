use super::*;
use catalog::{ErrorPayload, TransportError};

#[test]
fn default_is_loading() {
    let remote: Remote<Vec<u8>> = Remote::default();
    assert!(remote.is_loading());
    assert_eq!(remote.ready(), None);
}

#[test]
fn ok_result_is_ready() {
    let remote = Remote::from_result(Ok(3), "Failed to load books. Please try again.");
    assert_eq!(remote.ready(), Some(&3));
    assert_eq!(remote.error(), None);
}

#[test]
fn error_result_keeps_only_user_message() {
    let error = ApiError::Response { status: 500, payload: ErrorPayload::detail("stack trace") };
    let remote: Remote<u8> = Remote::from_result(Err(error), "Failed to load books. Please try again.");
    assert_eq!(remote.error(), Some("Failed to load books. Please try again."));

    let offline: Remote<u8> =
        Remote::from_result(Err(ApiError::Transport(TransportError::Request("down".to_owned()))), "x");
    assert_eq!(offline, Remote::Failed("x".to_owned()));
}
