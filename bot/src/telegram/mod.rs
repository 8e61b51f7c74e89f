//! Telegram Bot API adapter

mod client;
mod types;

pub use client::{TelegramApi, TelegramClient};
pub use types::{Chat, Message, Update, User};
