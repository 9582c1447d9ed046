//! Unit tests for the data-access client factory and its
//! missing-configuration policy.

use shelfmark::services::api_client::{
    ApiClient, ApiConfig, MissingConfigPolicy, PLACEHOLDER_BASE_URL,
};
use shelfmark::types::errors::{ApiError, ConfigError};

fn full_config() -> ApiConfig {
    ApiConfig {
        base_url: "https://db.example.com".to_string(),
        api_key: "public-anon-key".to_string(),
    }
}

#[test]
fn configured_client_targets_the_given_endpoint() {
    let client = ApiClient::from_config(Some(full_config()), MissingConfigPolicy::Fail).unwrap();
    assert_eq!(client.base_url(), "https://db.example.com");
    assert!(!client.is_placeholder());
}

#[test]
fn trailing_slash_in_base_url_is_normalized() {
    let client = ApiClient::new(ApiConfig {
        base_url: "https://db.example.com/".to_string(),
        api_key: "k".to_string(),
    });
    assert_eq!(client.endpoint("bookmarks"), "https://db.example.com/rest/v1/bookmarks");
}

#[test]
fn missing_config_with_placeholder_policy_still_yields_a_client() {
    let client = ApiClient::from_config(None, MissingConfigPolicy::Placeholder).unwrap();
    assert!(client.is_placeholder());
    assert_eq!(client.base_url(), PLACEHOLDER_BASE_URL);
}

#[test]
fn missing_config_with_fail_policy_is_a_construction_error() {
    let err = ApiClient::from_config(None, MissingConfigPolicy::Fail).unwrap_err();
    assert!(matches!(err, ConfigError::MissingConfig(_)));
    assert!(err.to_string().contains("SHELFMARK_API_URL"));
}

#[test]
fn explicit_config_wins_over_either_policy() {
    let client =
        ApiClient::from_config(Some(full_config()), MissingConfigPolicy::Placeholder).unwrap();
    assert!(!client.is_placeholder());
    assert_eq!(client.base_url(), "https://db.example.com");
}

#[test]
fn endpoint_builds_table_urls() {
    let client = ApiClient::new(full_config());
    assert_eq!(client.endpoint("folders"), "https://db.example.com/rest/v1/folders");
}

#[tokio::test]
async fn placeholder_client_fails_at_call_time_not_construction_time() {
    // `.invalid` never resolves, so the deferred failure surfaces as a
    // transport error on the first actual call.
    let client = ApiClient::from_config(None, MissingConfigPolicy::Placeholder).unwrap();
    let err = client.fetch_bookmarks().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
}
