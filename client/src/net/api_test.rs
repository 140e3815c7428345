use super::*;

fn cfg() -> ServiceConfig {
    ServiceConfig {
        auth_url: "https://auth.test".to_owned(),
        news_url: "https://news.test".to_owned(),
        admin_url: "https://admin.test".to_owned(),
        read_key: "reader".to_owned(),
        news_limit: 25,
    }
}

#[test]
fn news_endpoint_carries_limit() {
    assert_eq!(news_endpoint(&cfg()), "https://news.test?limit=25");
}

#[test]
fn admin_query_endpoint_formats_action() {
    assert_eq!(admin_query_endpoint(&cfg(), "users"), "https://admin.test?action=users");
    assert_eq!(admin_query_endpoint(&cfg(), "settings"), "https://admin.test?action=settings");
}

#[test]
fn news_read_never_carries_admin_key() {
    assert_eq!(read_key_for(&cfg(), ReadEndpoint::News), None);
    assert_eq!(read_key_for(&ServiceConfig::default(), ReadEndpoint::News), None);
}

#[test]
fn settings_read_always_carries_admin_key() {
    assert_eq!(read_key_for(&cfg(), ReadEndpoint::Settings), Some("reader"));
    let defaults = ServiceConfig::default();
    assert_eq!(
        read_key_for(&defaults, ReadEndpoint::Settings),
        Some(crate::config::DEFAULT_READ_KEY)
    );
}

#[test]
fn admin_key_header_is_lowercase() {
    assert_eq!(ADMIN_KEY_HEADER, ADMIN_KEY_HEADER.to_ascii_lowercase());
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "unexpected response: eof");
    assert_eq!(ApiError::Unauthorized.to_string(), "admin key rejected");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;

    // The stubs never await anything, so polling until ready is enough.
    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn calls_are_unavailable_outside_browser() {
        let cfg = cfg();
        assert_eq!(block_on(send_code(&cfg, "a@b.c")), Err(ApiError::Unavailable));
        assert_eq!(block_on(fetch_news(&cfg)), Err(ApiError::Unavailable));
        assert_eq!(block_on(fetch_about(&cfg)), Err(ApiError::Unavailable));
        assert_eq!(block_on(fetch_users(&cfg, "key")), Err(ApiError::Unavailable));
        assert_eq!(block_on(verify_user(&cfg, "key", 1, "idem")), Err(ApiError::Unavailable));
    }
}
