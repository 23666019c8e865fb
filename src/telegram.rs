//! Telegram Bot API (sendMessage only)

use crate::error::NotifyError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// A bot bound to the one chat it reports to.
#[derive(Clone)]
pub struct TelegramBot {
    client: Client,
    api_base: Url,
    token: String,
    chat_id: String,
}

impl TelegramBot {
    pub fn new(client: Client, api_base: Url, token: String, chat_id: String) -> Self {
        Self { client, api_base, token, chat_id }
    }

    /// Best-effort delivery: failures are logged, never returned.
    pub async fn send_message(&self, text: &str) {
        tracing::debug!("sending message to Telegram");
        match self.deliver(text).await {
            Ok(()) => tracing::debug!("message delivered to Telegram"),
            Err(e) => tracing::error!(error = %e, "failed to send message to Telegram"),
        }
    }

    async fn deliver(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.api_base.as_str().trim_end_matches('/'),
            self.token
        );

        let body = SendMessage { chat_id: &self.chat_id, text };

        // Telegram answers 4xx with the same envelope, so decode before looking at the status
        let resp: TgResponse = self.client.post(&url).json(&body).send().await?.json().await?;
        if !resp.ok {
            return Err(NotifyError::Rejected(
                resp.description.unwrap_or_else(|| "sendMessage failed".to_string()),
            ));
        }

        Ok(())
    }
}
