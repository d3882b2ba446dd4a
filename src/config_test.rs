use super::*;

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api, ApiConfig::default());
}

#[test]
fn reads_port_and_normalizes_api_url() {
    let config = HostConfig::from_vars(Some("8080"), Some("https://api.school.test/")).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api.base_url(), "https://api.school.test");
}

#[test]
fn rejects_bad_port() {
    assert!(matches!(HostConfig::from_vars(Some("http"), None), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn rejects_bad_api_url() {
    let err = HostConfig::from_vars(None, Some("ftp://x")).unwrap_err();
    assert!(matches!(err, ConfigError::Api(_)));
}

#[test]
fn client_match_compares_normalized_urls() {
    let config = HostConfig::from_vars(None, Some("http://127.0.0.1:8000/")).unwrap();
    assert!(config.matches_client(&ApiConfig::default()));
    assert!(!config.matches_client(&ApiConfig::new("https://elsewhere.test").unwrap()));
}
