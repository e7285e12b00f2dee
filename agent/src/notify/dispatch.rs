//! Desktop notification dispatch.

use super::types::LocalNotification;

/// Surface that raises notifications to the user.
pub trait NotificationDispatch: Send + Sync {
    /// Whether the user has granted permission to display notifications.
    fn permission_granted(&self) -> bool;

    /// Raise a notification. Failures are reported to the caller, which
    /// logs them and moves on.
    fn show(&self, note: &LocalNotification) -> Result<(), String>;
}

/// Dispatch through the desktop notification daemon.
pub struct DesktopDispatch {
    enabled: bool,
}

impl DesktopDispatch {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl NotificationDispatch for DesktopDispatch {
    fn permission_granted(&self) -> bool {
        self.enabled
    }

    fn show(&self, note: &LocalNotification) -> Result<(), String> {
        notify_rust::Notification::new()
            .summary(&note.title)
            .body(&note.body)
            .icon(&note.icon)
            .action("default", "Open inbox")
            .timeout(5000)
            .show()
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
