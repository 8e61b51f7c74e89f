//! Error types for the bot service
//!
//! Two layers: `TelegramError` for the Bot API adapter, `BotError` for
//! everything an update handler can fail with. Bad user input is never an
//! error here — it turns into reply text in the dispatcher.

use thiserror::Error;

/// Telegram Bot API client errors
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {description}")]
    Api { status: u16, description: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Update-handling errors
#[derive(Debug, Error)]
pub enum BotError {
    #[error("telegram error: {0}")]
    Telegram(#[from] TelegramError),

    #[error("render error: {0}")]
    Render(#[from] lifeweeks_core::RenderError),
}
