//! Background notification poll loop.
//!
//! Fetches the user's unread notifications on a fixed interval, raises
//! a local notification for each newly seen record, and queues a
//! fire-and-forget mark-read write for it. Read failures end the tick;
//! the next tick proceeds unaffected.


use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nimbus_client::api::{ApiClient, Notification};
use nimbus_client::{NimbusError, SessionToken};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::app::SharedState;
use crate::notify::{LocalNotification, NotificationDispatch};

const MARK_READ_QUEUE_CAPACITY: usize = 256;

async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

/// Remote endpoint the poller reads from and writes back to.
#[async_trait]
pub trait NotificationSource: Send + Sync {
    async fn fetch_notifications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Notification>, NimbusError>;

    async fn mark_read(&self, token: &SessionToken, id: &str) -> Result<(), NimbusError>;
}

#[async_trait]
impl NotificationSource for ApiClient {
    async fn fetch_notifications(
        &self,
        token: &SessionToken,
    ) -> Result<Vec<Notification>, NimbusError> {
        ApiClient::list_notifications(self, token, None).await
    }

    async fn mark_read(&self, token: &SessionToken, id: &str) -> Result<(), NimbusError> {
        ApiClient::mark_read(self, token, id).await
    }
}

/// Identifiers already surfaced during this agent's lifetime.
///
/// Entries are inserted at most once and never removed; growth is
/// bounded by the agent's session lifetime.
#[derive(Debug, Default)]
pub struct ShownSet {
    ids: HashSet<String>,
}

impl ShownSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the identifier if it hasn't been seen; returns whether it
    /// was new.
    pub fn insert_if_new(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A queued mark-read write.
///
/// Carries the token that was current when the notification was
/// surfaced, so one tick's read and writes authenticate identically.
#[derive(Debug, Clone)]
pub struct MarkRead {
    pub token: SessionToken,
    pub id: String,
}

/// Outcome of one poll tick, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub fetched: usize,
    pub displayed: usize,
    pub mark_read_queued: usize,
}

/// Periodic notification poller.
///
/// Owns the shown-set; the token lives in shared state and is read
/// fresh at every tick.
pub struct Poller {
    state: SharedState,
    source: Arc<dyn NotificationSource>,
    dispatch: Arc<dyn NotificationDispatch>,
    mark_tx: mpsc::Sender<MarkRead>,
    shown: ShownSet,
}

impl Poller {
    pub fn new(
        state: SharedState,
        source: Arc<dyn NotificationSource>,
        dispatch: Arc<dyn NotificationDispatch>,
        mark_tx: mpsc::Sender<MarkRead>,
    ) -> Self {
        Self {
            state,
            source,
            dispatch,
            mark_tx,
            shown: ShownSet::new(),
        }
    }

    /// Run one poll tick.
    ///
    /// A no-op when notification permission is missing or no session
    /// token has arrived yet. A fetch failure is logged and ends the
    /// tick; no retry happens before the next scheduled one.
    pub async fn poll_once(&mut self) -> TickSummary {
        let mut summary = TickSummary::default();

        if !self.dispatch.permission_granted() {
            tracing::debug!("Notification permission not granted, skipping poll");
            return summary;
        }

        let Some(token) = self.state.session_token().await else {
            tracing::debug!("No session token yet, skipping poll");
            return summary;
        };

        let notifications = match self.source.fetch_notifications(&token).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "Notification fetch failed, will retry next tick");
                return summary;
            }
        };
        summary.fetched = notifications.len();

        // Process in response order; each record's display and mark-read
        // are independent of the others.
        for notification in notifications {
            if notification.is_read() {
                continue;
            }
            if !self.shown.insert_if_new(&notification.id) {
                continue;
            }

            let config = self.state.config();
            let note =
                LocalNotification::for_kind(notification.kind, &config.icon, &config.inbox_url);
            match self.dispatch.show(&note) {
                Ok(()) => summary.displayed += 1,
                Err(e) => {
                    tracing::warn!(id = %notification.id, error = %e, "Failed to raise local notification");
                }
            }

            // Mark read remotely whether or not the local display
            // succeeded; never awaited here.
            let write = MarkRead {
                token: token.clone(),
                id: notification.id.clone(),
            };
            match self.mark_tx.try_send(write) {
                Ok(()) => summary.mark_read_queued += 1,
                Err(e) => {
                    tracing::debug!(id = %notification.id, "Mark-read queue full or closed: {e}");
                }
            }
        }

        summary
    }
}

/// Drain queued mark-read writes. Failures are logged and never retried.
async fn mark_read_worker(
    source: Arc<dyn NotificationSource>,
    mut rx: mpsc::Receiver<MarkRead>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("Mark-read worker stopped (shutdown)");
                return;
            }
            write = rx.recv() => match write {
                Some(MarkRead { token, id }) => {
                    if let Err(e) = source.mark_read(&token, &id).await {
                        tracing::debug!(id = %id, error = %e, "Mark-read write failed, not retried");
                    }
                }
                None => {
                    tracing::info!("Mark-read worker stopped (channel closed)");
                    return;
                }
            }
        }
    }
}

/// Start the mark-read writer task and return its queue sender.
pub fn spawn_mark_read_worker(
    source: Arc<dyn NotificationSource>,
    shutdown: CancellationToken,
) -> mpsc::Sender<MarkRead> {
    let (tx, rx) = mpsc::channel(MARK_READ_QUEUE_CAPACITY);
    tokio::spawn(mark_read_worker(source, rx, shutdown));
    tx
}

/// Poll immediately on activation, then on the fixed interval until
/// shutdown. There is no transition back to idle.
pub async fn notification_poll_loop(
    state: SharedState,
    source: Arc<dyn NotificationSource>,
    dispatch: Arc<dyn NotificationDispatch>,
) {
    let shutdown = state.shutdown_token().clone();
    let interval = Duration::from_millis(state.config().poll_interval_ms);

    let mark_tx = spawn_mark_read_worker(source.clone(), shutdown.clone());
    let mut poller = Poller::new(state, source, dispatch, mark_tx);

    tracing::info!(interval_ms = interval.as_millis() as u64, "Notification poll loop started");

    loop {
        let summary = poller.poll_once().await;
        if summary.displayed > 0 {
            tracing::info!(
                fetched = summary.fetched,
                displayed = summary.displayed,
                "Surfaced new notifications"
            );
        }
        if sleep_or_cancel(&shutdown, interval).await {
            tracing::info!("Notification poll loop stopped (shutdown)");
            return;
        }
    }
}
