use super::*;

#[test]
fn baked_source_falls_back_to_default() {
    if BAKED_BASE_URL.is_none() {
        assert_eq!(base_url_source(), DEFAULT_API_BASE_URL);
    }
}

#[test]
fn api_config_uses_baked_source() {
    let config = api_config().unwrap();
    assert_eq!(config.base_url(), base_url_source().trim().trim_end_matches('/'));
}
