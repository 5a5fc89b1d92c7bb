//! Environment-driven configuration

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the JSON file slot backing the link store
    pub links_file: String,
    /// EnvFilter directive for log output
    pub log_level: String,
    /// Append-mode log file; None logs to stderr
    pub log_file: Option<String>,
    /// Expiration applied when a submission does not specify one
    pub default_expiry_minutes: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        AppConfig {
            links_file: env::var("LINKS_FILE").unwrap_or_else(|_| "links.json".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: env::var("LOG_FILE").ok().filter(|s| !s.is_empty()),
            default_expiry_minutes: env::var("DEFAULT_EXPIRY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }
}
