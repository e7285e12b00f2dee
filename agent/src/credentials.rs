//! Credential channel between the hosting shell and the agent.
//!
//! The shell pushes control messages as JSON lines on the agent's
//! stdin. The only message today is a session token update.

use nimbus_client::SessionToken;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::SharedState;

/// Inbound control message.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum CredentialMessage {
    #[serde(rename = "JWT")]
    Jwt { jwt: String },
}

/// Apply a parsed message to shared state.
///
/// Token updates are side-effect only: no validation, no error surface.
pub async fn apply(state: &SharedState, message: CredentialMessage) {
    match message {
        CredentialMessage::Jwt { jwt } => {
            state.set_session_token(SessionToken::new(jwt)).await;
            tracing::info!("Session token updated");
        }
    }
}

/// Read credential messages from stdin until EOF or shutdown.
///
/// Malformed lines are logged and skipped; EOF closes the channel
/// without stopping the agent (the current token stays in effect).
pub async fn stdin_listener_loop(state: SharedState) {
    let shutdown = state.shutdown_token().clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("Credential listener stopped (shutdown)");
                return;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<CredentialMessage>(line) {
                        Ok(message) => apply(&state, message).await,
                        Err(e) => tracing::warn!(error = %e, "Ignoring malformed credential message"),
                    }
                }
                Ok(None) => {
                    tracing::info!("Credential channel closed (EOF)");
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Credential channel read failed");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn jwt_message_parses() {
        let msg: CredentialMessage = serde_json::from_str(r#"{"type":"JWT","jwt":"tok-1"}"#).unwrap();
        let CredentialMessage::Jwt { jwt } = msg;
        assert_eq!(jwt, "tok-1");
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        assert!(serde_json::from_str::<CredentialMessage>(r#"{"type":"LOGOUT"}"#).is_err());
        assert!(serde_json::from_str::<CredentialMessage>("not json").is_err());
    }

    #[tokio::test]
    async fn apply_replaces_the_session_token() {
        let state = SharedState::new(AppConfig::default());
        assert!(state.session_token().await.is_none());

        apply(&state, CredentialMessage::Jwt { jwt: "first".into() }).await;
        assert_eq!(state.session_token().await.unwrap().jwt, "first");

        apply(&state, CredentialMessage::Jwt { jwt: "second".into() }).await;
        assert_eq!(state.session_token().await.unwrap().jwt, "second");
    }
}
