use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification record from GET /notifications.
///
/// The agent treats these as read-only except for the act of marking
/// them read remotely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Whether the record has already been marked read remotely.
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

/// Fixed set of notification type tags known to the console.
///
/// Tags the agent doesn't know deserialize to `Unknown` rather than
/// failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    ResourceTransfer,
    TeamInvite,
    #[serde(other)]
    Unknown,
}

/// Request body for POST /notifications/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub read: bool,
}

/// Offset pagination for list endpoints, rendered as a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 50,
        }
    }
}

impl PageQuery {
    pub fn to_query(self) -> String {
        format!("page={}&perPage={}", self.page, self.per_page)
    }
}

/// Structured validation payload returned with 422 responses.
#[derive(Debug, Deserialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Flatten field errors into a single readable message.
    pub fn flatten(&self) -> String {
        self.errors
            .iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
