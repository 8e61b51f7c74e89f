//! Shared test fixtures and an in-memory Telegram API mock

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TelegramError;
use crate::telegram::{Chat, Message, TelegramApi, Update, User};

/// One outbound call recorded by [`MockTelegramApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message {
        chat_id: i64,
        text: String,
    },
    Photo {
        chat_id: i64,
        png: Vec<u8>,
        caption: Option<String>,
    },
}

/// Records sends instead of talking to Telegram
pub struct MockTelegramApi {
    sent: Mutex<Vec<Sent>>,
    updates: Mutex<Vec<Update>>,
}

impl MockTelegramApi {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_updates(updates: Vec<Update>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            updates: Mutex::new(updates),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramApi for MockTelegramApi {
    async fn get_updates(
        &self,
        offset: i64,
        _timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        Ok(self
            .updates
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.update_id >= offset)
            .cloned()
            .collect())
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent::Message {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: i64,
        png: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<(), TelegramError> {
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id,
            png,
            caption: caption.map(str::to_string),
        });
        Ok(())
    }
}

/// Text message update fixture
pub fn text_update(chat_id: i64, text: &str) -> Update {
    Update {
        update_id: 1,
        message: Some(Message {
            message_id: 1,
            chat: Chat { id: chat_id },
            from: Some(User {
                id: 5,
                first_name: "Ada".to_string(),
            }),
            text: Some(text.to_string()),
        }),
    }
}

/// Update with a non-text message (sticker, photo, ...)
pub fn update_without_text(chat_id: i64) -> Update {
    Update {
        update_id: 2,
        message: Some(Message {
            message_id: 2,
            chat: Chat { id: chat_id },
            from: None,
            text: None,
        }),
    }
}

/// Update carrying no message at all
pub fn update_without_message() -> Update {
    Update {
        update_id: 3,
        message: None,
    }
}
