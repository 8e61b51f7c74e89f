use std::env;

use lifeweeks_core::ValidationPolicy;

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    /// Bot API base URL; overridable for tests and local API servers.
    pub telegram_api_url: String,
    /// Long-poll timeout in seconds.
    pub poll_timeout_secs: u64,
    /// How to treat future birth dates and implausible ages.
    pub validation: ValidationPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bot_token: env::var("BOT_TOKEN").expect("BOT_TOKEN must be set"),
            telegram_api_url: env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            poll_timeout_secs: env::var("POLL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            validation: match env::var("VALIDATION").as_deref() {
                Ok("clamp") => ValidationPolicy::Clamp,
                _ => ValidationPolicy::Strict,
            },
        }
    }
}
