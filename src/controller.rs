//! Tools page controller.
//!
//! `ToolsClient` owns the session, the page model and the listener bindings.
//! Every operation is fetch → decode → render. API failures are logged and
//! swallowed so the page keeps whatever it showed before.

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::api::{ApiError, FollowAction, ToolsApi};
use crate::config::UiConfig;
use crate::domain::UserProfile;
use crate::ui::render::{self, Viewer};
use crate::ui::{Bindings, ClickAction, Notification, NotificationKind, Notifier, Page, UiEvent, UiHost};

/// Alert shown when an anonymous or signed-out visitor tries to follow a tool
pub const ACCOUNT_REQUIRED: &str = "Please create an account to follow tools";

/// Who is signed in, as far as the page knows
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Option<UserProfile>,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_mut(&mut self) -> Option<&mut UserProfile> {
        self.user.as_mut()
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// A user is loaded and not flagged anonymous
    pub fn can_follow(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.anonymous)
    }
}

/// Result of a follow toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    Unfollowed,
    /// No user or an anonymous one; the account alert was shown
    NeedsAccount,
    /// The request failed; nothing changed
    Failed,
}

pub struct ToolsClient<A: ToolsApi, H: UiHost> {
    api: A,
    host: H,
    session: SessionState,
    page: Page,
    bindings: Bindings,
    notifier: Notifier,
    min_query_len: usize,
}

impl<A: ToolsApi, H: UiHost> ToolsClient<A, H> {
    pub fn new(api: A, host: H, page: Page, ui: &UiConfig) -> Self {
        Self {
            api,
            host,
            session: SessionState::default(),
            page,
            bindings: Bindings::default(),
            notifier: Notifier::new(Duration::from_millis(ui.notification_ms)),
            min_query_len: ui.min_query_len,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Startup: load the session, bind listeners, then load the catalog when
    /// the page is the tools page
    pub async fn init(&mut self) {
        info!("Initializing tools client for {}", self.page.path());
        self.load_user().await;
        self.bind_events();
        if self.page.is_tools_page() {
            self.load_tools().await;
        }
    }

    /// Fetch the current user's profile. Returns false if it could not be loaded.
    pub async fn load_user(&mut self) -> bool {
        match self.api.fetch_profile().await {
            Ok(profile) => {
                info!("Loaded profile for {}", profile.username);
                self.session.set_user(profile);
                self.update_ui();
                true
            }
            Err(e) => {
                warn!("Error loading user profile: {}", e);
                false
            }
        }
    }

    /// Fill every user-info slot from the session
    pub fn update_ui(&mut self) {
        let Some(user) = self.session.user() else {
            return;
        };
        let fragment = render::user_info(user);
        for slot in &mut self.page.user_info {
            slot.replace_children(fragment.clone());
        }
    }

    /// Attach listeners to the elements present now. Returns false when
    /// already bound.
    pub fn bind_events(&mut self) -> bool {
        let bound = self.bindings.bind(&self.page);
        if bound {
            debug!(
                "Bound events: search_input={} platform_tabs={}",
                self.bindings.search_input(),
                self.page.platform_tabs.len()
            );
        }
        bound
    }

    /// Deliver an event. Events for elements without a listener are dropped.
    pub async fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::SearchInput(value) => {
                if self.bindings.search_input() {
                    self.search_tools(&value).await;
                }
            }
            UiEvent::PlatformTabClick(index) => {
                if !self.bindings.platform_tab(index) {
                    debug!("Ignoring click on unbound tab {}", index);
                    return;
                }
                if let Some(platform) = self.page.activate_tab(index) {
                    self.load_tools_by_platform(&platform).await;
                }
            }
            UiEvent::Click(target) => {
                if !self.bindings.document_click() {
                    return;
                }
                match ClickAction::from_target(&target) {
                    ClickAction::ToggleFollow(tool) => {
                        self.toggle_follow(&tool).await;
                    }
                    ClickAction::CopyCommand(command) => {
                        self.copy_to_clipboard(&command);
                    }
                    ClickAction::OpenSubcategory {
                        platform,
                        category,
                        subcategory,
                    } => {
                        self.load_subcategory(&platform, &category, &subcategory).await;
                    }
                    ClickAction::Ignore => {}
                }
            }
        }
    }

    /// Full catalog into the tools list
    pub async fn load_tools(&mut self) -> bool {
        let catalog = match self.api.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => return self.swallow("loading tools", e),
        };
        debug!("Rendering {} tools", catalog.tool_count());
        let cards = render::catalog_cards(&catalog, &self.viewer());
        self.page.set_tools_list(cards)
    }

    /// Category tree of one platform; resets the tools list to the prompt
    pub async fn load_tools_by_platform(&mut self, platform: &str) -> bool {
        let tree = match self.api.fetch_platform(platform).await {
            Ok(tree) => tree,
            Err(e) => return self.swallow("loading platform tools", e),
        };
        let rendered = self.page.set_categories(render::category_tree(&tree, platform));
        self.page.set_tools_list(render::select_subcategory_prompt());
        rendered
    }

    pub async fn load_subcategory(&mut self, platform: &str, category: &str, subcategory: &str) -> bool {
        let tools = match self.api.fetch_subcategory(platform, category, subcategory).await {
            Ok(tools) => tools,
            Err(e) => return self.swallow("loading subcategory tools", e),
        };
        let cards = render::subcategory_cards(&tools, subcategory, &self.viewer());
        self.page.set_tools_list(cards)
    }

    /// Search by the trimmed query. Too-short queries do nothing at all.
    pub async fn search_tools(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.chars().count() < self.min_query_len {
            return false;
        }
        let results = match self.api.search(query).await {
            Ok(results) => results,
            Err(e) => return self.swallow("searching tools", e),
        };
        debug!("Search '{}' matched {} tools", query, results.len());
        let cards = render::search_cards(&results, &self.viewer());
        self.page.set_tools_list(cards)
    }

    /// Random highlights into the featured slot, when the page has one
    pub async fn load_featured(&mut self) -> bool {
        if self.page.featured.is_none() {
            return false;
        }
        let featured = match self.api.fetch_featured().await {
            Ok(featured) => featured,
            Err(e) => return self.swallow("loading featured tools", e),
        };
        match self.page.featured.as_mut() {
            Some(slot) => {
                slot.replace_children(render::featured_cards(&featured));
                true
            }
            None => false,
        }
    }

    /// Flip follow state for a tool, server first, then session and button
    pub async fn toggle_follow(&mut self, tool: &str) -> FollowOutcome {
        if !self.session.can_follow() {
            self.host.alert(ACCOUNT_REQUIRED);
            return FollowOutcome::NeedsAccount;
        }
        let was_following = self.session.user().is_some_and(|u| u.is_following(tool));

        let action = FollowAction::toggle_from(was_following);
        if let Err(e) = self.api.set_follow(tool, action).await {
            error!("Error toggling follow for {}: {}", tool, e);
            return FollowOutcome::Failed;
        }

        if let Some(user) = self.session.user_mut() {
            match action {
                FollowAction::Follow => user.follow(tool),
                FollowAction::Unfollow => user.unfollow(tool),
            }
        }
        if let Some(button) = self.page.follow_button_mut(tool) {
            button.set_text(render::follow_label(!was_following));
        }

        info!("{} {}", action.endpoint(), tool);
        match action {
            FollowAction::Follow => FollowOutcome::Followed,
            FollowAction::Unfollow => FollowOutcome::Unfollowed,
        }
    }

    /// Copy through the host and confirm with a notification
    pub fn copy_to_clipboard(&self, text: &str) -> bool {
        crate::ui::copy_to_clipboard(&self.host, &self.notifier, text)
    }

    /// Show a notification; `kind` is `info`, `success`, or anything else for an error
    pub fn show_notification(&self, message: &str, kind: &str) -> Notification {
        self.notifier.show(&self.host, message, NotificationKind::from_label(kind))
    }

    fn viewer(&self) -> Viewer<'_> {
        Viewer::new(self.session.user())
    }

    fn swallow(&self, action: &str, e: ApiError) -> bool {
        error!("Error {}: {}", action, e);
        false
    }
}
