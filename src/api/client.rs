//! Tools API trait and error type

use async_trait::async_trait;

use crate::domain::{Catalog, FeaturedTool, HealthStatus, PlatformTree, Tool, UserProfile, UsernameAvailability};

/// Stateless client for the tools directory API - each call is independent
#[async_trait]
pub trait ToolsApi: Send + Sync {
    /// `GET /user/profile`
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError>;

    /// `GET /tools` - full platform/category/subcategory catalog
    async fn fetch_catalog(&self) -> Result<Catalog, ApiError>;

    /// `GET /tools?platform=` - category tree of one platform
    async fn fetch_platform(&self, platform: &str) -> Result<PlatformTree, ApiError>;

    /// `GET /tools?platform=&category=&subcategory=` - tools of one subcategory
    async fn fetch_subcategory(&self, platform: &str, category: &str, subcategory: &str)
    -> Result<Vec<Tool>, ApiError>;

    /// `GET /search?q=`
    async fn search(&self, query: &str) -> Result<Vec<Tool>, ApiError>;

    /// `POST /user/follow` or `POST /user/unfollow` with `{"tool": name}`
    async fn set_follow(&self, tool: &str, action: FollowAction) -> Result<(), ApiError>;

    /// `GET /tools/random`
    async fn fetch_featured(&self) -> Result<Vec<FeaturedTool>, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    /// `GET /check_username?username=`
    async fn check_username(&self, username: &str) -> Result<UsernameAvailability, ApiError>;
}

/// Which follow endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    /// Pick the action that flips the current state
    pub fn toggle_from(is_following: bool) -> Self {
        if is_following { Self::Unfollow } else { Self::Follow }
    }

    /// Path segment under `/user/`
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Unfollow => "unfollow",
        }
    }
}

/// Errors that can occur talking to the tools API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// True for a non-2xx response (as opposed to transport/decode failures)
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_action_toggle() {
        assert_eq!(FollowAction::toggle_from(true), FollowAction::Unfollow);
        assert_eq!(FollowAction::toggle_from(false), FollowAction::Follow);
    }

    #[test]
    fn test_follow_action_endpoint() {
        assert_eq!(FollowAction::Follow.endpoint(), "follow");
        assert_eq!(FollowAction::Unfollow.endpoint(), "unfollow");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 401,
            url: "http://localhost:5000/api/user/profile".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401 from http://localhost:5000/api/user/profile");
        assert!(err.is_status());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_decode_error_is_not_status() {
        let json_err = serde_json::from_str::<UserProfile>("{}").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(!err.is_status());
        assert_eq!(err.status(), None);
    }
}
