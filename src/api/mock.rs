//! In-memory ToolsApi for tests and offline runs
//!
//! Serves canned responses and records every call so callers can assert on
//! exactly which requests were made.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::client::{ApiError, FollowAction, ToolsApi};
use crate::domain::{Catalog, FeaturedTool, HealthStatus, PlatformTree, Tool, UserProfile, UsernameAvailability};

/// A request observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Profile,
    Catalog,
    Platform(String),
    Subcategory {
        platform: String,
        category: String,
        subcategory: String,
    },
    Search(String),
    Follow(String),
    Unfollow(String),
    Featured,
    Health,
    CheckUsername(String),
}

#[derive(Debug, Default)]
struct MockState {
    profile: Option<UserProfile>,
    catalog: Option<Catalog>,
    platforms: HashMap<String, PlatformTree>,
    subcategories: HashMap<(String, String, String), Vec<Tool>>,
    search_pool: Vec<Tool>,
    featured: Vec<FeaturedTool>,
    taken_usernames: Vec<String>,
    fail_follow: bool,
    fail_search: bool,
    calls: Vec<ApiCall>,
}

/// Mock tools API. Missing fixtures answer with HTTP 404.
#[derive(Debug, Default)]
pub struct MockToolsApi {
    state: Mutex<MockState>,
}

fn not_found(path: &str) -> ApiError {
    ApiError::Status {
        status: 404,
        url: format!("mock://api{}", path),
    }
}

impl MockToolsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.lock().profile = Some(profile);
        self
    }

    pub fn with_catalog(self, catalog: Catalog) -> Self {
        self.lock().catalog = Some(catalog);
        self
    }

    pub fn with_platform(self, platform: &str, tree: PlatformTree) -> Self {
        self.lock().platforms.insert(platform.to_string(), tree);
        self
    }

    pub fn with_subcategory(self, platform: &str, category: &str, subcategory: &str, tools: Vec<Tool>) -> Self {
        self.lock().subcategories.insert(
            (platform.to_string(), category.to_string(), subcategory.to_string()),
            tools,
        );
        self
    }

    /// Tools searched by case-insensitive substring on name and description
    pub fn with_search_pool(self, tools: Vec<Tool>) -> Self {
        self.lock().search_pool = tools;
        self
    }

    pub fn with_featured(self, featured: Vec<FeaturedTool>) -> Self {
        self.lock().featured = featured;
        self
    }

    pub fn with_taken_usernames<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().taken_usernames = names.into_iter().map(Into::into).collect();
        self
    }

    /// Make follow/unfollow answer with HTTP 500
    pub fn set_fail_follow(&self, fail: bool) {
        self.lock().fail_follow = fail;
    }

    /// Make search answer with HTTP 500
    pub fn set_fail_search(&self, fail: bool) {
        self.lock().fail_search = fail;
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // Poisoning is ignored; the fixture stays readable after a panic
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: ApiCall) -> std::sync::MutexGuard<'_, MockState> {
        let mut state = self.lock();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl ToolsApi for MockToolsApi {
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let state = self.record(ApiCall::Profile);
        state.profile.clone().ok_or_else(|| not_found("/user/profile"))
    }

    async fn fetch_catalog(&self) -> Result<Catalog, ApiError> {
        let state = self.record(ApiCall::Catalog);
        state.catalog.clone().ok_or_else(|| not_found("/tools"))
    }

    async fn fetch_platform(&self, platform: &str) -> Result<PlatformTree, ApiError> {
        let state = self.record(ApiCall::Platform(platform.to_string()));
        state
            .platforms
            .get(platform)
            .cloned()
            .ok_or_else(|| not_found(&format!("/tools?platform={}", platform)))
    }

    async fn fetch_subcategory(
        &self,
        platform: &str,
        category: &str,
        subcategory: &str,
    ) -> Result<Vec<Tool>, ApiError> {
        let state = self.record(ApiCall::Subcategory {
            platform: platform.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        });
        let key = (platform.to_string(), category.to_string(), subcategory.to_string());
        state
            .subcategories
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found("/tools?platform=&category=&subcategory="))
    }

    async fn search(&self, query: &str) -> Result<Vec<Tool>, ApiError> {
        let state = self.record(ApiCall::Search(query.to_string()));
        if state.fail_search {
            return Err(ApiError::Status {
                status: 500,
                url: "mock://api/search".to_string(),
            });
        }
        let needle = query.to_lowercase();
        Ok(state
            .search_pool
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle) || t.desc.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn set_follow(&self, tool: &str, action: FollowAction) -> Result<(), ApiError> {
        let call = match action {
            FollowAction::Follow => ApiCall::Follow(tool.to_string()),
            FollowAction::Unfollow => ApiCall::Unfollow(tool.to_string()),
        };
        let state = self.record(call);
        if state.fail_follow {
            return Err(ApiError::Status {
                status: 500,
                url: format!("mock://api/user/{}", action.endpoint()),
            });
        }
        Ok(())
    }

    async fn fetch_featured(&self) -> Result<Vec<FeaturedTool>, ApiError> {
        let state = self.record(ApiCall::Featured);
        Ok(state.featured.clone())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let state = self.record(ApiCall::Health);
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp,
            users: u64::from(state.profile.is_some()),
            tools: state.catalog.as_ref().map_or(0, |c| c.tool_count() as u64),
            posts: 0,
        })
    }

    async fn check_username(&self, username: &str) -> Result<UsernameAvailability, ApiError> {
        let state = self.record(ApiCall::CheckUsername(username.to_string()));
        let available = !username.is_empty() && !state.taken_usernames.iter().any(|n| n == username);
        Ok(UsernameAvailability { available })
    }
}
