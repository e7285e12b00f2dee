use std::sync::Arc;

use nimbus_client::SessionToken;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Agent shared state accessible from the poll loop and the credential
/// listener.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Session token pushed by the hosting shell; empty until the first
    /// credential arrives, overwritten on every update, never cleared.
    token: RwLock<Option<SessionToken>>,
    /// Agent configuration, fixed for the process lifetime.
    config: AppConfig,
    /// Cancellation for all background loops.
    shutdown: CancellationToken,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(SharedStateInner {
                token: RwLock::new(None),
                config,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }

    /// The current session token, if one has arrived yet.
    pub async fn session_token(&self) -> Option<SessionToken> {
        self.inner.token.read().await.clone()
    }

    /// Replace the session token used by all subsequent remote calls.
    pub async fn set_session_token(&self, token: SessionToken) {
        let mut slot = self.inner.token.write().await;
        *slot = Some(token);
    }
}
