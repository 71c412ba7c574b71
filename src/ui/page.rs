//! Page model: the element slots the controller reads and writes.
//!
//! Each slot corresponds to one of the page's fixed containers. A slot that
//! is `None` (or an empty list) means the page does not have that element,
//! and the operations that target it become no-ops.

use super::dom::{Element, Node};
use super::events::Role;

/// The tools directory page
#[derive(Debug, Clone, Default)]
pub struct Page {
    path: String,
    pub user_info: Vec<Element>,
    pub search_input: Option<Element>,
    pub platform_tabs: Vec<Element>,
    pub categories: Option<Element>,
    pub tools_list: Option<Element>,
    pub featured: Option<Element>,
}

impl Page {
    /// Empty page at a path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// The full tools page layout: one user-info slot, search box, one tab
    /// per platform, category sidebar and tools list
    pub fn tools_page<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("/tools")
            .with_user_info_slots(1)
            .with_search_input()
            .with_platform_tabs(platforms)
            .with_categories()
            .with_tools_list()
    }

    pub fn with_user_info_slots(mut self, count: usize) -> Self {
        self.user_info = (0..count).map(|_| Role::UserInfo.element("div")).collect();
        self
    }

    pub fn with_search_input(mut self) -> Self {
        self.search_input = Some(Role::SearchInput.element("input"));
        self
    }

    pub fn with_platform_tabs<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platform_tabs = platforms
            .into_iter()
            .map(|p| {
                let platform = p.into();
                Role::PlatformTab
                    .element("button")
                    .data("platform", platform.clone())
                    .text(platform)
            })
            .collect();
        self
    }

    pub fn with_categories(mut self) -> Self {
        self.categories = Some(Role::Categories.element("div"));
        self
    }

    pub fn with_tools_list(mut self) -> Self {
        self.tools_list = Some(Role::ToolsList.element("div"));
        self
    }

    pub fn with_featured(mut self) -> Self {
        self.featured = Some(Role::Featured.element("div"));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the catalog should load at startup
    pub fn is_tools_page(&self) -> bool {
        self.path.contains("/tools")
    }

    /// Put `active` on the tab at `index` and remove it from every other tab.
    /// Returns the tab's `platform` data attribute.
    pub fn activate_tab(&mut self, index: usize) -> Option<String> {
        let platform = self.platform_tabs.get(index)?.get_data("platform")?.to_string();
        for (i, tab) in self.platform_tabs.iter_mut().enumerate() {
            if i == index {
                tab.add_class("active");
            } else {
                tab.remove_class("active");
            }
        }
        Some(platform)
    }

    /// Index of the tab carrying `active`, if any
    pub fn active_tab(&self) -> Option<usize> {
        self.platform_tabs.iter().position(|t| t.has_class("active"))
    }

    /// Replace the tools list content; false when the page has no tools list
    pub fn set_tools_list<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> bool {
        match self.tools_list.as_mut() {
            Some(list) => {
                list.replace_children(nodes);
                true
            }
            None => false,
        }
    }

    /// Replace the categories content; false when the page has no categories slot
    pub fn set_categories<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> bool {
        match self.categories.as_mut() {
            Some(categories) => {
                categories.replace_children(nodes);
                true
            }
            None => false,
        }
    }

    /// First follow button for a tool in the tools list
    pub fn follow_button_mut(&mut self, tool: &str) -> Option<&mut Element> {
        let pred = |el: &Element| Role::FollowButton.matches(el) && el.get_data("tool") == Some(tool);
        self.tools_list.as_mut().and_then(|list| list.find_first_mut(&pred))
    }

    /// Cards currently shown in the tools list
    pub fn tool_cards(&self) -> Vec<&Element> {
        self.tools_list
            .as_ref()
            .map(|list| list.find_by_class("tool-card"))
            .unwrap_or_default()
    }

    /// Serialize every present slot, in page order
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in &self.user_info {
            out.push_str(&el.to_html());
        }
        for el in self
            .search_input
            .iter()
            .chain(self.platform_tabs.iter())
            .chain(self.featured.iter())
            .chain(self.categories.iter())
            .chain(self.tools_list.iter())
        {
            out.push_str(&el.to_html());
        }
        out
    }
}
