//! Tool records and the small auxiliary payloads served next to them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A catalog entry. Read-only on the client; identity is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default, alias = "description")]
    pub desc: String,
    #[serde(default)]
    pub difficulty: String,
    /// Example invocation, shown in a copyable command box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Present on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Present on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Tool {
    pub fn new(name: impl Into<String>, desc: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            difficulty: difficulty.into(),
            command: None,
            platform: None,
            category: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Attach the placement fields the search endpoint returns
    pub fn with_placement(mut self, platform: impl Into<String>, category: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self.category = Some(category.into());
        self
    }

    /// The command string, if present and non-empty
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref().filter(|c| !c.is_empty())
    }
}

/// Known difficulty levels. The wire value stays a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl Difficulty {
    /// Parse a difficulty label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "elite" => Some(Self::Elite),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }

    /// Class token for a difficulty badge. Unknown labels keep their text
    /// with whitespace collapsed so the result stays a single class.
    pub fn css_class(label: &str) -> String {
        match Self::parse(label) {
            Some(level) => level.as_str().to_string(),
            None => label.split_whitespace().collect::<Vec<_>>().join("-"),
        }
    }
}

/// Entry from `GET /tools/random` (homepage highlights)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedTool {
    pub id: u64,
    pub name: String,
    pub platform: String,
    pub difficulty: String,
    /// Truncated server-side to about 100 characters
    #[serde(default)]
    pub description: String,
}

/// Payload of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub tools: u64,
    #[serde(default)]
    pub posts: u64,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Payload of `GET /check_username`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameAvailability {
    pub available: bool,
}
