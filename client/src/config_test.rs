use super::*;

#[test]
fn from_raw_defaults_when_unset() {
    let config = ClientConfig::from_raw(None).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn default_matches_default_constant() {
    assert_eq!(ClientConfig::default().api_base_url, "http://localhost:8000/api/");
}

#[test]
fn normalize_base_url_adds_trailing_slash() {
    assert_eq!(
        normalize_base_url("http://example.test:8000/api").unwrap(),
        "http://example.test:8000/api/"
    );
}

#[test]
fn normalize_base_url_collapses_repeated_trailing_slashes() {
    assert_eq!(normalize_base_url("https://example.test/api///").unwrap(), "https://example.test/api/");
}

#[test]
fn normalize_base_url_trims_whitespace() {
    assert_eq!(normalize_base_url("  http://h:8000/api/  ").unwrap(), "http://h:8000/api/");
}

#[test]
fn normalize_base_url_rejects_blank() {
    assert_eq!(normalize_base_url("   "), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn normalize_base_url_rejects_other_schemes() {
    assert_eq!(
        normalize_base_url("ftp://example.test/api"),
        Err(ConfigError::UnsupportedScheme("ftp://example.test/api".to_owned()))
    );
}

#[test]
fn from_build_env_always_yields_slash_terminated_url() {
    let config = ClientConfig::from_build_env();
    assert!(config.api_base_url.ends_with('/'));
}
