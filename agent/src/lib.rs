pub mod app;
pub mod config;
pub mod credentials;
pub mod notify;
pub mod poller;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load and validate runtime configuration.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let config = AppConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    tracing::info!(
        api_base = %config.api_base,
        interval_ms = config.poll_interval_ms,
        "Configuration loaded"
    );
    Ok(config)
}
