//! UI events and role-based dispatch.
//!
//! This module provides:
//! - `Role`: the class marker that identifies what an element is for
//! - `UiEvent`: input events the controller reacts to
//! - `ClickAction`: what a delegated click resolves to
//! - `Bindings`: which elements had listeners attached at startup

use super::dom::Element;
use super::page::Page;

/// Element roles, keyed by the class marker the page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    UserInfo,
    SearchInput,
    PlatformTab,
    Categories,
    ToolsList,
    Featured,
    Subcategory,
    FollowButton,
    CopyButton,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::UserInfo,
        Role::SearchInput,
        Role::PlatformTab,
        Role::Categories,
        Role::ToolsList,
        Role::Featured,
        Role::Subcategory,
        Role::FollowButton,
        Role::CopyButton,
    ];

    /// The class marker for this role
    pub fn class(self) -> &'static str {
        match self {
            Role::UserInfo => "user-info",
            Role::SearchInput => "search-input",
            Role::PlatformTab => "platform-tab",
            Role::Categories => "categories",
            Role::ToolsList => "tools-list",
            Role::Featured => "featured-tools",
            Role::Subcategory => "subcategory",
            Role::FollowButton => "follow-btn",
            Role::CopyButton => "copy-btn",
        }
    }

    /// New element carrying this role's marker
    pub fn element(self, tag: &str) -> Element {
        Element::with_class(tag, self.class())
    }

    pub fn matches(self, el: &Element) -> bool {
        el.has_class(self.class())
    }

    /// First role whose marker the element carries
    pub fn of(el: &Element) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.matches(el))
    }
}

/// Input events delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search box value changed
    SearchInput(String),
    /// A platform tab was clicked (index into `Page::platform_tabs`)
    PlatformTabClick(usize),
    /// Any click anywhere in the document; the target element is passed along
    Click(Element),
}

/// Result of routing a document-level click by the target's role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    ToggleFollow(String),
    CopyCommand(String),
    OpenSubcategory {
        platform: String,
        category: String,
        subcategory: String,
    },
    Ignore,
}

impl ClickAction {
    /// Resolve a click target. Targets with a role marker but missing data
    /// attributes are ignored.
    pub fn from_target(target: &Element) -> Self {
        match Role::of(target) {
            Some(Role::FollowButton) => target
                .get_data("tool")
                .map(|t| ClickAction::ToggleFollow(t.to_string()))
                .unwrap_or(ClickAction::Ignore),
            Some(Role::CopyButton) => target
                .get_data("command")
                .map(|c| ClickAction::CopyCommand(c.to_string()))
                .unwrap_or(ClickAction::Ignore),
            Some(Role::Subcategory) => {
                match (
                    target.get_data("platform"),
                    target.get_data("category"),
                    target.get_data("subcategory"),
                ) {
                    (Some(p), Some(c), Some(s)) => ClickAction::OpenSubcategory {
                        platform: p.to_string(),
                        category: c.to_string(),
                        subcategory: s.to_string(),
                    },
                    _ => ClickAction::Ignore,
                }
            }
            _ => ClickAction::Ignore,
        }
    }
}

/// Listeners attached by `bind_events`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    bound: bool,
    search_input: bool,
    platform_tabs: usize,
    document_click: bool,
}

impl Bindings {
    /// Attach to whatever the page has right now. Returns false if already bound.
    pub fn bind(&mut self, page: &Page) -> bool {
        if self.bound {
            return false;
        }
        self.bound = true;
        self.search_input = page.search_input.is_some();
        self.platform_tabs = page.platform_tabs.len();
        self.document_click = true;
        true
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn search_input(&self) -> bool {
        self.search_input
    }

    /// Tabs that existed at bind time; tabs appended later have no listener
    pub fn platform_tab(&self, index: usize) -> bool {
        index < self.platform_tabs
    }

    pub fn document_click(&self) -> bool {
        self.document_click
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_of() {
        let el = Role::FollowButton.element("button");
        assert_eq!(Role::of(&el), Some(Role::FollowButton));
        assert_eq!(Role::of(&Element::new("div")), None);
    }

    #[test]
    fn test_click_follow_button() {
        let el = Role::FollowButton.element("button").data("tool", "nmap");
        assert_eq!(ClickAction::from_target(&el), ClickAction::ToggleFollow("nmap".to_string()));
    }

    #[test]
    fn test_click_follow_button_without_tool_is_ignored() {
        let el = Role::FollowButton.element("button");
        assert_eq!(ClickAction::from_target(&el), ClickAction::Ignore);
    }

    #[test]
    fn test_click_copy_button() {
        let el = Role::CopyButton
            .element("button")
            .data("tool", "nmap")
            .data("command", "nmap -p- 'host'");
        assert_eq!(
            ClickAction::from_target(&el),
            ClickAction::CopyCommand("nmap -p- 'host'".to_string())
        );
    }

    #[test]
    fn test_click_subcategory() {
        let el = Role::Subcategory
            .element("div")
            .data("platform", "Linux")
            .data("category", "Kali Linux")
            .data("subcategory", "Password_Attacks");
        assert_eq!(
            ClickAction::from_target(&el),
            ClickAction::OpenSubcategory {
                platform: "Linux".to_string(),
                category: "Kali Linux".to_string(),
                subcategory: "Password_Attacks".to_string(),
            }
        );
    }

    #[test]
    fn test_click_unrelated_element() {
        assert_eq!(
            ClickAction::from_target(&Element::with_class("div", "tool-card")),
            ClickAction::Ignore
        );
    }

    #[test]
    fn test_bind_is_idempotent() {
        let mut page = Page::tools_page(["Linux"]);
        let mut bindings = Bindings::default();
        assert!(bindings.bind(&page));
        page.platform_tabs.push(Role::PlatformTab.element("button").data("platform", "Web"));
        assert!(!bindings.bind(&page));
        assert!(bindings.platform_tab(0));
        assert!(!bindings.platform_tab(1));
        assert!(bindings.search_input());
        assert!(bindings.document_click());
    }

    #[test]
    fn test_bind_without_search_input() {
        let page = Page::new("/dashboard");
        let mut bindings = Bindings::default();
        bindings.bind(&page);
        assert!(!bindings.search_input());
        assert!(!bindings.platform_tab(0));
    }
}
