//! Telegram Bot API client implementation

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{ApiResponse, Update};
use crate::error::TelegramError;

/// Port for the Telegram Bot API, mockable in tests
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Long-poll for updates after `offset`.
    async fn get_updates(&self, offset: i64, timeout_secs: u64)
        -> Result<Vec<Update>, TelegramError>;

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError>;

    /// Upload a PNG photo with an optional caption.
    async fn send_photo(
        &self,
        chat_id: i64,
        png: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<(), TelegramError>;
}

/// reqwest-backed implementation of the Bot API
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TelegramError> {
        let status = response.status();
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Deserialization(e.to_string()))?;

        if envelope.ok {
            envelope.result.ok_or_else(|| {
                TelegramError::Deserialization("ok response without a result".to_string())
            })
        } else {
            Err(TelegramError::Api {
                status: status.as_u16(),
                description: envelope.description.unwrap_or_default(),
            })
        }
    }
}

#[async_trait]
impl TelegramApi for TelegramClient {
    async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let response = self
            .http
            .post(self.method_url("getUpdates"))
            .json(&json!({
                "offset": offset,
                "timeout": timeout_secs,
                "allowed_updates": ["message"],
            }))
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?;
        // Discard the echoed Message payload
        self.handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat_id: i64,
        png: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<(), TelegramError> {
        let photo = Part::bytes(png)
            .file_name("weeks.png")
            .mime_str("image/png")?;
        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("photo", photo);
        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        let response = self
            .http
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;
        self.handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_embedded_in_method_urls() {
        let client = TelegramClient::new("https://api.telegram.org/", "123:abc");
        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123:abc/getUpdates"
        );
    }
}
