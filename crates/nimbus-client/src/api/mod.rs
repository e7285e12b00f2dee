//! Nimbus console REST API client.
//!
//! Provides typed access to the notification endpoints with automatic
//! Bearer token header injection.

mod notifications;
mod request;
#[cfg(test)]
mod tests;

pub mod models;

pub use models::{MarkReadRequest, Notification, NotificationKind, PageQuery};

use url::Url;

use crate::NimbusError;

/// Default production console API base.
pub const DEFAULT_API_BASE: &str = "https://console.nimbus.dev/api";

/// Console API client with automatic auth header injection.
pub struct ApiClient {
    pub(super) http: reqwest::Client,
    pub(super) base: Url,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    pub fn new(base: &str) -> Result<Self, NimbusError> {
        // A trailing slash changes how Url::join resolves paths; normalize.
        let normalized = format!("{}/", base.trim_end_matches('/'));
        let base = Url::parse(&normalized)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    /// Resolve an endpoint path against the API base.
    pub(super) fn endpoint(&self, path: &str) -> Result<Url, NimbusError> {
        Ok(self.base.join(path)?)
    }
}
