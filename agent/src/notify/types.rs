//! Local notification payloads.

use nimbus_client::api::NotificationKind;

/// Fixed body text shown under every notification title.
pub const NOTIFICATION_BODY: &str = "Open your inbox to review the details.";

/// Title lookup keyed by the remote type tag.
pub fn kind_title(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::ResourceTransfer => "Resource transfer",
        NotificationKind::TeamInvite => "Team invite",
        NotificationKind::Unknown => "Notification",
    }
}

/// A local notification ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    /// Deep link to the inbox, opened when the user follows the
    /// notification.
    pub link: String,
}

impl LocalNotification {
    /// Build the fixed payload for a notification of the given kind.
    pub fn for_kind(kind: NotificationKind, icon: &str, link: &str) -> Self {
        Self {
            title: kind_title(kind).to_string(),
            body: NOTIFICATION_BODY.to_string(),
            icon: icon.to_string(),
            link: link.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_the_fixed_lookup() {
        assert_eq!(kind_title(NotificationKind::ResourceTransfer), "Resource transfer");
        assert_eq!(kind_title(NotificationKind::TeamInvite), "Team invite");
        assert_eq!(kind_title(NotificationKind::Unknown), "Notification");
    }

    #[test]
    fn payload_carries_icon_and_deep_link() {
        let note = LocalNotification::for_kind(
            NotificationKind::TeamInvite,
            "mail-unread",
            "https://console.nimbus.dev/inbox",
        );
        assert_eq!(note.title, "Team invite");
        assert_eq!(note.body, NOTIFICATION_BODY);
        assert_eq!(note.icon, "mail-unread");
        assert_eq!(note.link, "https://console.nimbus.dev/inbox");
    }
}
