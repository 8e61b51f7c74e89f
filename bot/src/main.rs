//! Lifeweeks Telegram bot
//!
//! Receives a birth date in chat and replies with a PNG poster of the
//! sender's life in weeks (one cell per week of a 90-year span), rendered by
//! `lifeweeks-core`. Talks to the Telegram Bot API by long polling.

use std::time::Duration;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod dispatch;
mod error;
mod telegram;

#[cfg(test)]
mod test_utils;


use config::Config;
use telegram::{TelegramApi, TelegramClient};

/// Pause before retrying after a failed poll.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lifeweeks_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting lifeweeks bot...");

    let config = Config::from_env();
    let api = TelegramClient::new(&config.telegram_api_url, &config.bot_token);

    tracing::info!(
        poll_timeout_secs = config.poll_timeout_secs,
        validation = ?config.validation,
        "Polling for updates"
    );
    run(&api, &config).await
}

/// Long-poll loop. A failing update never stops the loop; a failing poll
/// backs off and retries.
async fn run(api: &impl TelegramApi, config: &Config) -> anyhow::Result<()> {
    let mut offset = 0i64;
    loop {
        let updates = match api.get_updates(offset, config.poll_timeout_secs).await {
            Ok(updates) => updates,
            Err(e) => {
                tracing::error!("getUpdates failed: {e}");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let today = Utc::now().date_naive();
            if let Err(e) = dispatch::handle_update(api, update, today, config.validation).await {
                tracing::error!("failed to handle update: {e}");
            }
        }
    }
}
