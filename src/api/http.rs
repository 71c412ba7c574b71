//! reqwest implementation of the tools API
//!
//! This module implements the ToolsApi trait against the Flask backend.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::api::client::{ApiError, FollowAction, ToolsApi};
use crate::config::ApiConfig;
use crate::domain::{Catalog, FeaturedTool, HealthStatus, PlatformTree, Tool, UserProfile, UsernameAvailability};

/// HTTP client for the tools API
pub struct HttpToolsApi {
    client: Client,
    base: String,
}

impl HttpToolsApi {
    /// Create a client from config
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            normalize_prefix(&config.api_prefix)
        );
        Url::parse(&base).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base, e)))?;

        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(std::time::Duration::from_millis(ms));
        }
        if let Some(cookie) = &config.session_cookie {
            let mut headers = HeaderMap::new();
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ApiError::InvalidHeader(format!("session cookie: {}", e)))?;
            headers.insert(COOKIE, value);
            builder = builder.default_headers(headers);
        }
        let client = builder.build()?;

        Ok(Self { client, base })
    }

    /// Base URL all API paths are appended to (e.g. `http://host:5000/api`)
    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {} {:?}", url, query);
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let body = Self::send(request, &url).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[async_trait]
impl ToolsApi for HttpToolsApi {
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/user/profile", &[]).await
    }

    async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_json("/tools", &[]).await
    }

    async fn fetch_platform(&self, platform: &str) -> Result<PlatformTree, ApiError> {
        self.get_json("/tools", &[("platform", platform)]).await
    }

    async fn fetch_subcategory(
        &self,
        platform: &str,
        category: &str,
        subcategory: &str,
    ) -> Result<Vec<Tool>, ApiError> {
        self.get_json(
            "/tools",
            &[("platform", platform), ("category", category), ("subcategory", subcategory)],
        )
        .await
    }

    async fn search(&self, query: &str) -> Result<Vec<Tool>, ApiError> {
        self.get_json("/search", &[("q", query)]).await
    }

    async fn set_follow(&self, tool: &str, action: FollowAction) -> Result<(), ApiError> {
        let url = self.url(&format!("/user/{}", action.endpoint()));
        debug!("POST {} tool={}", url, tool);
        let request = self.client.post(&url).json(&json!({ "tool": tool }));
        Self::send(request, &url).await?;
        Ok(())
    }

    async fn fetch_featured(&self) -> Result<Vec<FeaturedTool>, ApiError> {
        self.get_json("/tools/random", &[]).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health", &[]).await
    }

    async fn check_username(&self, username: &str) -> Result<UsernameAvailability, ApiError> {
        self.get_json("/check_username", &[("username", username)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, prefix: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            api_prefix: prefix.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_joins_prefix() {
        let api = HttpToolsApi::new(&config("http://localhost:5000/", "/api")).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/api/"), "/api");
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/"), "");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = HttpToolsApi::new(&config("not a url", "/api"));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_cookie_rejected() {
        let mut cfg = config("http://localhost:5000", "/api");
        cfg.session_cookie = Some("session=abc\n".to_string());
        assert!(matches!(HttpToolsApi::new(&cfg), Err(ApiError::InvalidHeader(_))));
    }
}
