//! Renderers: domain data → element trees for the page slots.
//!
//! Four card views share one card layout and differ only in the meta badges
//! and whether the command box is shown:
//! - full catalog: platform badge + difficulty, command box
//! - subcategory: difficulty + subcategory label, command box
//! - search: "platform > category" + difficulty, no command box
//! - featured: compact cards without follow buttons

use crate::domain::{Catalog, Difficulty, FeaturedTool, PlatformTree, Tool, UserProfile};

use super::dom::{Element, Node};
use super::events::Role;

pub const LABEL_FOLLOWING: &str = "⭐ Following";
pub const LABEL_FOLLOW: &str = "☆ Follow";

pub const SELECT_SUBCATEGORY: &str = "Select a subcategory to view tools";
pub const NO_TOOLS_IN_CATEGORY: &str = "No tools found in this category";
pub const NO_SEARCH_RESULTS: &str = "No tools found matching your search";

/// Follow button label for a state
pub fn follow_label(following: bool) -> &'static str {
    if following { LABEL_FOLLOWING } else { LABEL_FOLLOW }
}

/// `snake_case_label` → `snake case label`
pub fn humanize(label: &str) -> String {
    label.replace('_', " ")
}

/// Content of a user-info slot: avatar initial plus name/experience summary
pub fn user_info(profile: &UserProfile) -> Vec<Node> {
    vec![
        Element::with_class("div", "user-avatar")
            .text(profile.avatar_initial())
            .into(),
        Element::new("div")
            .child(Element::new("h3").text(profile.username.clone()))
            .child(Element::new("p").text(format!("{} Level", profile.experience)))
            .into(),
    ]
}

/// How the session affects card rendering
#[derive(Debug, Clone, Copy)]
pub struct Viewer<'a> {
    user: Option<&'a UserProfile>,
}

impl<'a> Viewer<'a> {
    pub fn new(user: Option<&'a UserProfile>) -> Self {
        Self { user }
    }

    /// Follow buttons are hidden only for a known anonymous user
    pub fn shows_follow(&self) -> bool {
        !self.user.is_some_and(|u| u.anonymous)
    }

    pub fn is_following(&self, tool: &str) -> bool {
        self.user.is_some_and(|u| u.is_following(tool))
    }
}

fn difficulty_badge(difficulty: &str) -> Element {
    Element::with_class("span", "difficulty")
        .class(Difficulty::css_class(difficulty))
        .text(difficulty)
}

fn follow_button(tool: &str, following: bool) -> Element {
    Role::FollowButton
        .element("button")
        .data("tool", tool)
        .text(follow_label(following))
}

fn command_box(tool: &Tool, command: &str) -> Element {
    Element::with_class("div", "tool-command")
        .child(Element::new("code").text(command))
        .child(
            Role::CopyButton
                .element("button")
                .data("tool", tool.name.clone())
                .data("command", command)
                .child(Element::with_class("i", "fas").class("fa-copy")),
        )
}

/// One tool card with the given meta badges
pub fn tool_card(tool: &Tool, viewer: &Viewer<'_>, meta: Vec<Node>, with_command: bool) -> Element {
    let mut header = Element::with_class("div", "tool-header")
        .child(Element::with_class("h3", "tool-name").text(tool.name.clone()));
    if viewer.shows_follow() {
        header = header.child(follow_button(&tool.name, viewer.is_following(&tool.name)));
    }

    let mut card = Element::with_class("div", "tool-card")
        .child(header)
        .child(Element::with_class("p", "tool-desc").text(tool.desc.clone()))
        .child(Element::with_class("div", "tool-meta").children(meta));

    if with_command && let Some(command) = tool.command() {
        card = card.child(command_box(tool, command));
    }
    card
}

fn placeholder(text: &str) -> Vec<Node> {
    vec![Element::new("p").text(text).into()]
}

/// Full catalog: one card per leaf tool, flattened in catalog order
pub fn catalog_cards(catalog: &Catalog, viewer: &Viewer<'_>) -> Vec<Node> {
    catalog
        .entries()
        .map(|entry| {
            let meta = vec![
                Element::with_class("span", "platform").text(entry.platform).into(),
                difficulty_badge(&entry.tool.difficulty).into(),
            ];
            tool_card(entry.tool, viewer, meta, true).into()
        })
        .collect()
}

/// Category sidebar for a platform: headers and clickable subcategories
pub fn category_tree(tree: &PlatformTree, platform: &str) -> Vec<Node> {
    tree.categories()
        .map(|(category, subcategories)| {
            let header = Element::new("h4").text(humanize(category).to_uppercase());
            let items = subcategories.into_iter().map(|subcategory| {
                Role::Subcategory
                    .element("div")
                    .data("platform", platform)
                    .data("category", category)
                    .data("subcategory", subcategory)
                    .text(humanize(subcategory))
                    .into()
            });
            Element::with_class("div", "category").child(header).children(items).into()
        })
        .collect()
}

/// Tools list reset shown after a platform tab is opened
pub fn select_subcategory_prompt() -> Vec<Node> {
    placeholder(SELECT_SUBCATEGORY)
}

/// Tools of one subcategory
pub fn subcategory_cards(tools: &[Tool], subcategory: &str, viewer: &Viewer<'_>) -> Vec<Node> {
    if tools.is_empty() {
        return placeholder(NO_TOOLS_IN_CATEGORY);
    }
    tools
        .iter()
        .map(|tool| {
            let meta = vec![
                difficulty_badge(&tool.difficulty).into(),
                Element::new("span").text(humanize(subcategory)).into(),
            ];
            tool_card(tool, viewer, meta, true).into()
        })
        .collect()
}

/// Search results. The follow label reflects the real follow state here too;
/// the original page always showed "☆ Follow" in this view.
pub fn search_cards(results: &[Tool], viewer: &Viewer<'_>) -> Vec<Node> {
    if results.is_empty() {
        return placeholder(NO_SEARCH_RESULTS);
    }
    results
        .iter()
        .map(|tool| {
            let placement = format!(
                "{} > {}",
                tool.platform.as_deref().unwrap_or_default(),
                tool.category.as_deref().unwrap_or_default()
            );
            let meta = vec![
                Element::new("span").text(placement).into(),
                difficulty_badge(&tool.difficulty).into(),
            ];
            tool_card(tool, viewer, meta, false).into()
        })
        .collect()
}

/// Homepage highlights
pub fn featured_cards(featured: &[FeaturedTool]) -> Vec<Node> {
    featured
        .iter()
        .map(|tool| {
            Element::with_class("div", "tool-card")
                .class("featured")
                .data("id", tool.id.to_string())
                .child(Element::with_class("h3", "tool-name").text(tool.name.clone()))
                .child(Element::with_class("p", "tool-desc").text(tool.description.clone()))
                .child(
                    Element::with_class("div", "tool-meta")
                        .child(Element::with_class("span", "platform").text(tool.platform.clone()))
                        .child(difficulty_badge(&tool.difficulty)),
                )
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nmap() -> Tool {
        Tool::new("nmap", "Network scanner", "Beginner").with_command("nmap -sV target")
    }

    fn wrap(nodes: Vec<Node>) -> Element {
        Element::new("div").children(nodes)
    }

    #[test]
    fn test_user_info_fragment() {
        let profile = UserProfile::new("neo", "Intermediate");
        let html = wrap(user_info(&profile)).inner_html();
        assert_eq!(
            html,
            r#"<div class="user-avatar">n</div><div><h3>neo</h3><p>Intermediate Level</p></div>"#
        );
    }

    #[test]
    fn test_viewer_without_user_shows_follow() {
        let viewer = Viewer::new(None);
        assert!(viewer.shows_follow());
        assert!(!viewer.is_following("nmap"));
    }

    #[test]
    fn test_viewer_anonymous_hides_follow() {
        let anon = UserProfile::anonymous("Anonymous_1");
        assert!(!Viewer::new(Some(&anon)).shows_follow());
    }

    #[test]
    fn test_card_layout() {
        let user = UserProfile::new("neo", "Intermediate").with_followed(["nmap"]);
        let viewer = Viewer::new(Some(&user));
        let card = tool_card(&nmap(), &viewer, vec![], true);
        assert_eq!(
            card.to_html(),
            concat!(
                r#"<div class="tool-card"><div class="tool-header"><h3 class="tool-name">nmap</h3>"#,
                r#"<button class="follow-btn" data-tool="nmap">⭐ Following</button></div>"#,
                r#"<p class="tool-desc">Network scanner</p><div class="tool-meta"></div>"#,
                r#"<div class="tool-command"><code>nmap -sV target</code>"#,
                r#"<button class="copy-btn" data-tool="nmap" data-command="nmap -sV target">"#,
                r#"<i class="fas fa-copy"></i></button></div></div>"#
            )
        );
    }

    #[test]
    fn test_command_with_quotes_is_escaped() {
        let tool = Tool::new("sqlmap", "SQLi", "intermediate").with_command(r#"sqlmap -u "http://x/?id=1" --data='a'"#);
        let html = tool_card(&tool, &Viewer::new(None), vec![], true).to_html();
        assert!(html.contains(r#"data-command="sqlmap -u &quot;http://x/?id=1&quot; --data=&#39;a&#39;""#));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_markup_in_catalog_data_is_inert() {
        let tool = Tool::new("<img src=x>", "<b>bold</b>", "beginner");
        let html = tool_card(&tool, &Viewer::new(None), vec![], true).to_html();
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_catalog_cards_count_and_badges() {
        let catalog = Catalog::new()
            .with_tool("network", "scanning", "active", nmap())
            .with_tool("web", "proxy", "intercept", Tool::new("burp", "proxy", "Intermediate"));
        let list = wrap(catalog_cards(&catalog, &Viewer::new(None)));
        let cards = list.find_by_class("tool-card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].find_by_class("platform")[0].text_content(), "network");
        let badge = cards[1].find_by_class("difficulty")[0];
        assert!(badge.has_class("intermediate"));
        assert_eq!(badge.text_content(), "Intermediate");
        assert!(cards[1].find_by_class("tool-command").is_empty());
    }

    #[test]
    fn test_category_tree() {
        let tree = PlatformTree::new()
            .with_subcategory("kali_linux", "password_attacks", ["hashcat"])
            .with_subcategory("kali_linux", "forensics", ["autopsy"]);
        let sidebar = wrap(category_tree(&tree, "Linux"));
        assert_eq!(sidebar.find_by_class("category").len(), 1);
        assert_eq!(sidebar.find_all(|e| e.tag() == "h4")[0].text_content(), "KALI LINUX");
        let subs = sidebar.find_by_class("subcategory");
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].text_content(), "password attacks");
        assert_eq!(subs[0].get_data("subcategory"), Some("password_attacks"));
        assert_eq!(subs[0].get_data("category"), Some("kali_linux"));
        assert_eq!(subs[0].get_data("platform"), Some("Linux"));
    }

    #[test]
    fn test_subcategory_cards() {
        let list = wrap(subcategory_cards(&[nmap()], "port_scanning", &Viewer::new(None)));
        let card = list.find_by_class("tool-card")[0];
        assert!(card.find_by_class("platform").is_empty());
        assert!(card.text_content().contains("port scanning"));
        assert_eq!(card.find_by_class("tool-command").len(), 1);
    }

    #[test]
    fn test_subcategory_empty_placeholder() {
        let list = wrap(subcategory_cards(&[], "x", &Viewer::new(None)));
        assert_eq!(list.inner_html(), "<p>No tools found in this category</p>");
    }

    #[test]
    fn test_search_cards_reflect_follow_state() {
        let user = UserProfile::new("neo", "Intermediate").with_followed(["nmap"]);
        let tool = nmap().with_placement("Linux", "Information Gathering");
        let list = wrap(search_cards(&[tool], &Viewer::new(Some(&user))));
        let card = list.find_by_class("tool-card")[0];
        assert!(card.text_content().contains("Linux > Information Gathering"));
        assert_eq!(card.find_by_class("follow-btn")[0].text_content(), LABEL_FOLLOWING);
        assert!(card.find_by_class("tool-command").is_empty());
    }

    #[test]
    fn test_search_empty_placeholder() {
        let list = wrap(search_cards(&[], &Viewer::new(None)));
        assert_eq!(list.inner_html(), "<p>No tools found matching your search</p>");
    }

    #[test]
    fn test_featured_cards() {
        let featured = vec![FeaturedTool {
            id: 3,
            name: "Wireshark".to_string(),
            platform: "Linux".to_string(),
            difficulty: "beginner".to_string(),
            description: "Network protocol analyzer".to_string(),
        }];
        let list = wrap(featured_cards(&featured));
        let card = list.find_by_class("featured")[0];
        assert_eq!(card.get_data("id"), Some("3"));
        assert!(card.find_by_class("follow-btn").is_empty());
    }
}
