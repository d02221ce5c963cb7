use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed_and_trimmed() {
    let cfg = ClientConfig::from_lookup(lookup(&[
        (BASE_URL_VAR, "https://books.example.test/api/"),
        (REQUEST_TIMEOUT_VAR, "42"),
        (CONNECT_TIMEOUT_VAR, " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://books.example.test/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn garbage_timeout_is_an_error() {
    let err = ClientConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { var: REQUEST_TIMEOUT_VAR, value: "soon".to_owned() });
}

#[test]
fn non_http_base_url_is_an_error() {
    let err = ClientConfig::from_lookup(lookup(&[(BASE_URL_VAR, "books.local")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    assert!(err.to_string().contains("books.local"));
}

#[test]
fn with_base_url_strips_trailing_slash() {
    assert_eq!(ClientConfig::with_base_url("http://x/api/").base_url, "http://x/api");
}

#[test]
fn env_var_reads_the_process_environment() {
    assert_eq!(env_var("SHELFMARK_TEST_SURELY_UNSET_VAR"), None);
    assert_eq!(env_var("CARGO_MANIFEST_DIR").as_deref(), Some(env!("CARGO_MANIFEST_DIR")));
}
