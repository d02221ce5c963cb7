use super::*;

#[test]
fn new_strips_trailing_slash() {
    assert_eq!(BrowserTransport::new("https://books.test/api/").base_url(), "https://books.test/api");
}

#[test]
fn default_uses_build_time_base() {
    assert_eq!(BrowserTransport::default().base_url(), API_BASE.trim_end_matches('/'));
}

#[test]
fn url_for_joins_base_and_path() {
    let transport = BrowserTransport::new("/api");
    assert_eq!(transport.url_for(&ApiRequest::get("/book/7/")), "/api/book/7/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_send_is_unavailable() {
    let transport = BrowserTransport::new("/api");
    let result = block_on_ready(transport.send(ApiRequest::get("/auth/profile/")));
    assert!(matches!(result, Err(TransportError::Unavailable(_))));
}

/// Minimal single-poll executor: the native send path never awaits.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("native browser transport should resolve immediately"),
    }
}
