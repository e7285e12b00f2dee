//! Nimbus notification agent binary.
//!
//! Headless companion to the console: polls for unread notifications,
//! raises desktop notifications, and marks them read. Session
//! credentials arrive as JSON lines on stdin.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nimbus_agent::app::SharedState;
use nimbus_agent::{credentials, init_config, notify, poller};
use nimbus_client::api::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Nimbus notification agent");

    let config = init_config()?;
    let client = Arc::new(ApiClient::new(&config.api_base)?);
    let dispatch = Arc::new(notify::DesktopDispatch::new(config.notifications_enabled));
    let state = SharedState::new(config);

    // Credential channel from the hosting shell
    let s = state.clone();
    tokio::spawn(async move { credentials::stdin_listener_loop(s).await });

    // Notification poll loop (first tick fires immediately)
    let s = state.clone();
    let poll_handle =
        tokio::spawn(async move { poller::notification_poll_loop(s, client, dispatch).await });

    tracing::info!("Agent running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    state.shutdown_token().cancel();
    let _ = poll_handle.await;
    Ok(())
}
