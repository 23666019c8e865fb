//! Failure kinds for each stage of the bot.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup failure while reading the environment. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),

    #[error("failed to parse {key}='{value}': {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to parse default of {key} ('{value}'): {reason}")]
    InvalidDefault {
        key: String,
        value: String,
        reason: String,
    },
}

/// Everything that can go wrong inside one poll iteration.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("homework API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("homework API answered {0} instead of 200 OK")]
    HttpStatus(StatusCode),

    #[error("homework API body is not valid JSON: {0}")]
    JsonDecode(String),

    #[error("homework API response is not a JSON object")]
    NotAnObject,

    /// No `homeworks` key at all. Routine, only logged.
    #[error("homework API response has no `homeworks` key")]
    MissingHomeworks,

    #[error("`homeworks` in the API response is not a list")]
    MalformedHomeworks,

    #[error("homework record has no `homework_name`")]
    NoHomeworkName,

    #[error(
        "homework record has an undocumented or missing status ({})",
        .0.as_deref().unwrap_or("none")
    )]
    UnknownStatus(Option<String>),
}

/// Telegram delivery failure. Logged and dropped by the caller.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("sendMessage request failed: {0}")]
    Request(reqwest::Error),

    #[error("sendMessage rejected: {0}")]
    Rejected(String),
}

// The Bot API URL embeds the token, keep it out of anything that gets logged
impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Request(e.without_url())
    }
}
