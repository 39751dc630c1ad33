use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            api_upstream_url: DEFAULT_API_UPSTREAM_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://api.cabinet.test/api/"),
        ("API_PROXY_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream_url, "https://api.cabinet.test/api");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn blank_upstream_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
}

#[test]
fn rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn rejects_upstream_without_scheme() {
    let err = HostConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "localhost:8000")])).unwrap_err();
    assert!(matches!(err, ConfigError::UpstreamScheme(_)));
}
