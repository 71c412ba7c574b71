//! User profile as returned by `GET /user/profile`.

use serde::{Deserialize, Deserializer, Serialize};

/// The logged-in (or anonymous) user for the current page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub anonymous: bool,
    /// Names of followed tools, in the order they were followed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub followed_tools: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserProfile {
    /// Create a registered (non-anonymous) profile
    pub fn new(username: impl Into<String>, experience: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            experience: experience.into(),
            anonymous: false,
            followed_tools: Vec::new(),
        }
    }

    /// Create an anonymous profile
    pub fn anonymous(username: impl Into<String>) -> Self {
        Self {
            anonymous: true,
            ..Self::new(username, "beginner")
        }
    }

    /// Builder-style list of followed tools
    pub fn with_followed<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.followed_tools = tools.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_following(&self, tool: &str) -> bool {
        self.followed_tools.iter().any(|t| t == tool)
    }

    /// Record a follow; no-op if already followed
    pub fn follow(&mut self, tool: &str) {
        if !self.is_following(tool) {
            self.followed_tools.push(tool.to_string());
        }
    }

    /// Drop every entry for the tool
    pub fn unfollow(&mut self, tool: &str) {
        self.followed_tools.retain(|t| t != tool);
    }

    /// Avatar letter: first character of the username, case untouched
    pub fn avatar_initial(&self) -> String {
        self.username.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{"username":"neo","experience":"Intermediate","anonymous":false,"followed_tools":["nmap"]}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "neo");
        assert_eq!(profile.experience, "Intermediate");
        assert!(!profile.anonymous);
        assert_eq!(profile.followed_tools, vec!["nmap"]);
    }

    #[test]
    fn test_followed_tools_absent_or_null() {
        let absent: UserProfile =
            serde_json::from_str(r#"{"username":"a","experience":"beginner","anonymous":true}"#).unwrap();
        assert!(absent.followed_tools.is_empty());

        let null: UserProfile = serde_json::from_str(
            r#"{"username":"a","experience":"beginner","anonymous":false,"followed_tools":null}"#,
        )
        .unwrap();
        assert!(null.followed_tools.is_empty());
    }

    #[test]
    fn test_follow_is_idempotent() {
        let mut profile = UserProfile::new("neo", "Intermediate");
        profile.follow("nmap");
        profile.follow("nmap");
        assert_eq!(profile.followed_tools, vec!["nmap"]);
    }

    #[test]
    fn test_unfollow_removes_all_entries() {
        let mut profile = UserProfile::new("neo", "Intermediate").with_followed(["nmap", "hydra", "nmap"]);
        profile.unfollow("nmap");
        assert_eq!(profile.followed_tools, vec!["hydra"]);
        assert!(!profile.is_following("nmap"));
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(UserProfile::new("neo", "x").avatar_initial(), "n");
        assert_eq!(UserProfile::new("Ünïcode", "x").avatar_initial(), "Ü");
        assert_eq!(UserProfile::new("", "x").avatar_initial(), "");
    }

    #[test]
    fn test_anonymous_constructor() {
        let profile = UserProfile::anonymous("Anonymous_ab12cd34");
        assert!(profile.anonymous);
        assert_eq!(profile.experience, "beginner");
    }
}
