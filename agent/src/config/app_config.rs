//! Runtime agent configuration from environment variables.

use nimbus_client::api::DEFAULT_API_BASE;

const DEFAULT_INBOX_URL: &str = "https://console.nimbus.dev/inbox";
const DEFAULT_ICON: &str = "mail-unread";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

const MIN_POLL_INTERVAL_MS: u64 = 250;
const MAX_POLL_INTERVAL_MS: u64 = 3_600_000;

/// Runtime configuration, fixed for the agent's lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub poll_interval_ms: u64,
    /// Local notification permission gate. When false, poll ticks are
    /// no-ops: no network calls, no displays.
    pub notifications_enabled: bool,
    /// Deep link attached to every raised notification.
    pub inbox_url: String,
    /// Icon for raised notifications (freedesktop icon name or path).
    pub icon: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notifications_enabled: true,
            inbox_url: DEFAULT_INBOX_URL.into(),
            icon: DEFAULT_ICON.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let g = |key: &str| -> String { std::env::var(key).unwrap_or_default() };

        Self {
            api_base: non_empty_or(&g("NIMBUS_API_BASE"), DEFAULT_API_BASE),
            poll_interval_ms: parse_u64(&g("NIMBUS_POLL_INTERVAL_MS"), DEFAULT_POLL_INTERVAL_MS),
            notifications_enabled: parse_bool(&g("NIMBUS_NOTIFICATIONS_ENABLED"), true),
            inbox_url: non_empty_or(&g("NIMBUS_INBOX_URL"), DEFAULT_INBOX_URL),
            icon: non_empty_or(&g("NIMBUS_ICON"), DEFAULT_ICON),
        }
    }

    /// Validate loaded values. Returns a message for the first invalid one.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(format!(
                "NIMBUS_POLL_INTERVAL_MS must be between {MIN_POLL_INTERVAL_MS} and {MAX_POLL_INTERVAL_MS}"
            ));
        }
        if nimbus_client::api::ApiClient::new(&self.api_base).is_err() {
            return Err("NIMBUS_API_BASE must be a valid URL".into());
        }
        Ok(())
    }
}

fn non_empty_or(s: &str, default: &str) -> String {
    if s.is_empty() {
        default.into()
    } else {
        s.into()
    }
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s {
        "true" => true,
        "false" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval_ms, 5_000);
        assert!(config.notifications_enabled);
    }

    #[test]
    fn parse_helpers_tolerate_empty_and_garbage() {
        assert_eq!(parse_u64("", 5_000), 5_000);
        assert_eq!(parse_u64("250", 5_000), 250);
        assert_eq!(parse_u64("soon", 5_000), 5_000);

        assert!(parse_bool("", true));
        assert!(!parse_bool("false", true));
        assert!(parse_bool("yes", true));

        assert_eq!(non_empty_or("", "fallback"), "fallback");
        assert_eq!(non_empty_or("set", "fallback"), "set");
    }

    #[test]
    fn interval_out_of_range_is_rejected() {
        let mut config = AppConfig::default();
        config.poll_interval_ms = 100;
        assert!(config.validate().is_err());
        config.poll_interval_ms = 4_000_000;
        assert!(config.validate().is_err());
        config.poll_interval_ms = 250;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_api_base_is_rejected() {
        let mut config = AppConfig::default();
        config.api_base = "not a url".into();
        assert!(config.validate().is_err());
    }
}
