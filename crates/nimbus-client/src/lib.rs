//! Nimbus console API client library.
//!
//! Provides bearer-token session handling and typed access to the
//! console's notification endpoints.

pub mod api;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential for the console API.
///
/// Issued by the hosting shell and pushed to the agent over the
/// credential channel; the agent never refreshes or inspects it.
/// Staleness is the shell's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub jwt: String,
}

impl SessionToken {
    pub fn new(jwt: impl Into<String>) -> Self {
        Self { jwt: jwt.into() }
    }

    /// Render the `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.jwt)
    }
}

/// Unified error type for the nimbus-client crate.
#[derive(Debug, thiserror::Error)]
pub enum NimbusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Nimbus API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
