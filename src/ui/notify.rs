//! Transient notifications and clipboard copy.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, warn};

use super::host::UiHost;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// `info` and `success` map to themselves; anything else is an error
    pub fn from_label(label: &str) -> Self {
        match label {
            "info" => Self::Info,
            "success" => Self::Success,
            _ => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct Visible {
    next_id: u64,
    items: Vec<Notification>,
}

/// Shows notifications and removes each one after its lifetime.
///
/// Cloning shares the visible set.
#[derive(Debug, Clone)]
pub struct Notifier {
    visible: Arc<Mutex<Visible>>,
    lifetime: Duration,
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            visible: Arc::new(Mutex::new(Visible::default())),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Display a message. Outside a tokio runtime the notification is shown
    /// but stays visible, since there is nothing to run the dismiss timer.
    pub fn show(&self, host: &dyn UiHost, message: &str, kind: NotificationKind) -> Notification {
        let notification = {
            let mut visible = lock(&self.visible);
            visible.next_id += 1;
            let notification = Notification {
                id: visible.next_id,
                message: message.to_string(),
                kind,
            };
            visible.items.push(notification.clone());
            notification
        };
        debug!("Notification {} ({}): {}", notification.id, kind.as_str(), message);
        host.notify(&notification);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let visible = Arc::clone(&self.visible);
                let lifetime = self.lifetime;
                let id = notification.id;
                handle.spawn(async move {
                    tokio::time::sleep(lifetime).await;
                    lock(&visible).items.retain(|n| n.id != id);
                });
            }
            Err(e) => warn!("No runtime for notification {} dismiss timer: {}", notification.id, e),
        }

        notification
    }

    /// Notifications currently on screen, oldest first
    pub fn visible(&self) -> Vec<Notification> {
        lock(&self.visible).items.clone()
    }
}

fn lock(visible: &Mutex<Visible>) -> std::sync::MutexGuard<'_, Visible> {
    visible.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write `text` to the clipboard and confirm with an info notification.
/// A rejected write is logged and shows nothing.
pub fn copy_to_clipboard(host: &dyn UiHost, notifier: &Notifier, text: &str) -> bool {
    match host.write_clipboard(text) {
        Ok(()) => {
            notifier.show(host, COPIED_MESSAGE, NotificationKind::Info);
            true
        }
        Err(e) => {
            warn!("Failed to copy to clipboard: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::host::RecordingHost;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(NotificationKind::from_label("info"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_label("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_label("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_label("warning"), NotificationKind::Error);
        assert_eq!(NotificationKind::from_label(""), NotificationKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_dismissed_after_lifetime() {
        let host = RecordingHost::new();
        let notifier = Notifier::new(Duration::from_millis(3000));
        notifier.show(&host, "Saved", NotificationKind::Success);
        assert_eq!(notifier.visible().len(), 1);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(notifier.visible().len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(notifier.visible().is_empty());
        assert_eq!(host.notifications().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_dismiss_independently() {
        let host = RecordingHost::new();
        let notifier = Notifier::new(Duration::from_secs(3));
        let first = notifier.show(&host, "one", NotificationKind::Info);
        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = notifier.show(&host, "two", NotificationKind::Error);
        assert_ne!(first.id, second.id);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let visible = notifier.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "two");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_to_clipboard_success() {
        let host = RecordingHost::new();
        let notifier = Notifier::new(Duration::from_secs(3));
        assert!(copy_to_clipboard(&host, &notifier, "nmap -sV"));
        assert_eq!(host.clipboard(), vec!["nmap -sV".to_string()]);
        let shown = host.notifications();
        assert_eq!(shown[0].message, COPIED_MESSAGE);
        assert_eq!(shown[0].kind, NotificationKind::Info);
    }

    #[test]
    fn test_copy_to_clipboard_without_runtime() {
        let host = RecordingHost::new();
        let notifier = Notifier::new(Duration::from_secs(3));
        assert!(copy_to_clipboard(&host, &notifier, "nmap -sV"));
        assert_eq!(host.clipboard(), vec!["nmap -sV".to_string()]);
        assert_eq!(host.notifications().len(), 1);
        assert_eq!(notifier.visible().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_to_clipboard_failure_is_silent() {
        let host = RecordingHost::new();
        host.set_fail_clipboard(true);
        let notifier = Notifier::new(Duration::from_secs(3));
        assert!(!copy_to_clipboard(&host, &notifier, "x"));
        assert!(host.notifications().is_empty());
        assert!(notifier.visible().is_empty());
    }
}
