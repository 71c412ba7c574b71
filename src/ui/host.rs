//! Host capabilities the controller needs beyond the page itself.

use std::sync::Mutex;

use colored::*;

use crate::error::{Result, ToolhubError};

use super::notify::{Notification, NotificationKind};

/// Blocking alert dialog, clipboard and toast surface
pub trait UiHost: Send + Sync {
    /// Modal message the user must acknowledge
    fn alert(&self, message: &str);

    /// Write text to the system clipboard
    fn write_clipboard(&self, text: &str) -> Result<()>;

    /// A notification became visible
    fn notify(&self, notification: &Notification);
}

/// Terminal host: alerts and notifications go to stderr, the clipboard is
/// echoed to stdout so it can be piped
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl UiHost for ConsoleHost {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message);
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn notify(&self, notification: &Notification) {
        let marker = match notification.kind {
            NotificationKind::Info => "i".cyan(),
            NotificationKind::Success => "✓".green(),
            NotificationKind::Error => "✗".red(),
        };
        eprintln!("{} {}", marker, notification.message);
    }
}

#[derive(Debug, Default)]
struct Recorded {
    alerts: Vec<String>,
    clipboard: Vec<String>,
    notifications: Vec<Notification>,
    fail_clipboard: bool,
}

/// Host that records everything, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingHost {
    inner: Mutex<Recorded>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make clipboard writes fail
    pub fn set_fail_clipboard(&self, fail: bool) {
        self.lock().fail_clipboard = fail;
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn clipboard(&self) -> Vec<String> {
        self.lock().clipboard.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl UiHost for RecordingHost {
    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn write_clipboard(&self, text: &str) -> Result<()> {
        let mut inner = self.lock();
        if inner.fail_clipboard {
            return Err(ToolhubError::Clipboard("permission denied".to_string()));
        }
        inner.clipboard.push(text.to_string());
        Ok(())
    }

    fn notify(&self, notification: &Notification) {
        self.lock().notifications.push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_clipboard() {
        let host = RecordingHost::new();
        host.write_clipboard("nmap -sV").unwrap();
        host.set_fail_clipboard(true);
        assert!(host.write_clipboard("hydra").is_err());
        assert_eq!(host.clipboard(), vec!["nmap -sV".to_string()]);
    }

    #[test]
    fn test_recording_host_alerts() {
        let host = RecordingHost::new();
        host.alert("hello");
        assert_eq!(host.alerts(), vec!["hello".to_string()]);
    }
}
