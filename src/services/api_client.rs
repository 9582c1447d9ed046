//! Remote data-access client for the bookmark backend.
//!
//! The backend speaks a PostgREST-style API: row sets under `/rest/v1/`,
//! filtered with `column=eq.value` query parameters, authenticated with an
//! `apikey` header plus bearer token. Construction is driven by process
//! environment; what happens when the environment is incomplete is an
//! explicit [`MissingConfigPolicy`] choice, not an implicit fallback.

use serde_json::json;

use crate::types::bookmark::{Bookmark, Folder};
use crate::types::errors::{ApiError, ConfigError};

/// Environment variable naming the service endpoint.
pub const ENV_API_URL: &str = "SHELFMARK_API_URL";
/// Environment variable naming the public access key.
pub const ENV_API_KEY: &str = "SHELFMARK_API_KEY";

/// Inert endpoint used when construction must succeed without configuration.
/// `.invalid` is reserved and never resolves, so calls fail at call time.
pub const PLACEHOLDER_BASE_URL: &str = "https://placeholder.invalid";

/// Required client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    /// Reads both required values from the environment. Returns `None` when
    /// either is absent or empty.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_API_URL).ok().filter(|v| !v.is_empty())?;
        let api_key = std::env::var(ENV_API_KEY).ok().filter(|v| !v.is_empty())?;
        Some(Self { base_url, api_key })
    }
}

/// What the factory does when required configuration is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingConfigPolicy {
    /// Construct a client against [`PLACEHOLDER_BASE_URL`] so the
    /// application can initialize; calls through it fail when made.
    Placeholder,
    /// Refuse construction with [`ConfigError::MissingConfig`].
    Fail,
}

/// Typed client for the bookmark backend.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    api_key: String,
    placeholder: bool,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            placeholder: false,
            http: reqwest::Client::new(),
        }
    }

    /// Builds a client from an optional configuration according to `policy`.
    /// With `Placeholder` this always returns a client.
    pub fn from_config(
        config: Option<ApiConfig>,
        policy: MissingConfigPolicy,
    ) -> Result<Self, ConfigError> {
        match (config, policy) {
            (Some(config), _) => Ok(Self::new(config)),
            (None, MissingConfigPolicy::Placeholder) => Ok(Self {
                base_url: PLACEHOLDER_BASE_URL.to_string(),
                api_key: String::new(),
                placeholder: true,
                http: reqwest::Client::new(),
            }),
            (None, MissingConfigPolicy::Fail) => Err(ConfigError::MissingConfig(format!(
                "{} and {}",
                ENV_API_URL, ENV_API_KEY
            ))),
        }
    }

    /// Builds a client from process environment according to `policy`.
    pub fn from_env(policy: MissingConfigPolicy) -> Result<Self, ConfigError> {
        Self::from_config(ApiConfig::from_env(), policy)
    }

    /// True when this client was constructed without real configuration.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a table endpoint.
    pub fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn decode_rows<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Vec<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::StatusError(status.as_u16()));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::DecodeError(e.to_string()))
    }

    async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::StatusError(status.as_u16()));
        }
        Ok(())
    }

    /// Fetches all bookmarks, newest first.
    pub async fn fetch_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        let url = format!("{}?select=*&order=created_at.desc", self.endpoint("bookmarks"));
        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;
        Self::decode_rows(response).await
    }

    /// Fetches all folders in the backend's stored order.
    pub async fn fetch_folders(&self) -> Result<Vec<Folder>, ApiError> {
        let url = format!("{}?select=*", self.endpoint("folders"));
        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;
        Self::decode_rows(response).await
    }

    pub async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}?id=eq.{}", self.endpoint("bookmarks"), id);
        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;
        Self::expect_success(response).await
    }

    pub async fn set_favorite(&self, id: &str, favorite: bool) -> Result<(), ApiError> {
        let url = format!("{}?id=eq.{}", self.endpoint("bookmarks"), id);
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&json!({ "is_favorite": favorite }))
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;
        Self::expect_success(response).await
    }

    pub async fn move_bookmark(&self, id: &str, folder_id: Option<&str>) -> Result<(), ApiError> {
        let url = format!("{}?id=eq.{}", self.endpoint("bookmarks"), id);
        let response = self
            .request(reqwest::Method::PATCH, &url)
            .json(&json!({ "folder_id": folder_id }))
            .send()
            .await
            .map_err(|e| ApiError::NetworkError(e.to_string()))?;
        Self::expect_success(response).await
    }
}
