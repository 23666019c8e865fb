use crate::config::{Redacted, env_parsing};
use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

#[derive(Clone, Debug)]
pub struct BotConfig {
    // --- required ---
    pub practicum_token: String,
    pub telegram_token: String,
    /// Numeric id or `@channel` name, passed to Telegram as-is
    pub telegram_chat_id: String,

    // --- optional (with defaults) ---
    pub endpoint: Url,
    pub telegram_api_base: Url,
    pub retry_period: Duration,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env");

        let practicum_token = env_parsing::must("PRACTICUM_TOKEN")?;
        let telegram_token = env_parsing::must("TELEGRAM_TOKEN")?;
        let telegram_chat_id = env_parsing::must("TELEGRAM_CHAT_ID")?;

        let endpoint: Url = env_parsing::parse_str("PRACTICUM_ENDPOINT", DEFAULT_ENDPOINT)?;
        let telegram_api_base: Url =
            env_parsing::parse_str("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API)?;

        let retry_period: u64 =
            env_parsing::parse("RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)?;
        let retry_period = Duration::from_secs(retry_period);

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_base,
            retry_period,
        })
    }

    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // the only test touching these keys; kept in one function so the steps can't interleave
    #[test]
    fn from_env_requires_all_three_values() {
        env::set_var("PRACTICUM_TOKEN", "practicum-token");
        env::set_var("TELEGRAM_TOKEN", "123:abc");
        env::set_var("TELEGRAM_CHAT_ID", "   ");
        for key in ["PRACTICUM_ENDPOINT", "TELEGRAM_API_URL", "RETRY_PERIOD_SECS"] {
            env::remove_var(key);
        }

        let err = BotConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(k) if k == "TELEGRAM_CHAT_ID"));

        env::set_var("TELEGRAM_CHAT_ID", "42");
        let cfg = BotConfig::from_env().unwrap();
        assert_eq!(cfg.practicum_token, "practicum-token");
        assert_eq!(cfg.telegram_chat_id, "42");
        assert_eq!(cfg.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(cfg.retry_period, Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS));

        env::set_var("RETRY_PERIOD_SECS", "soon");
        assert!(matches!(
            BotConfig::from_env(),
            Err(ConfigError::Invalid { key, .. }) if key == "RETRY_PERIOD_SECS"
        ));
        env::remove_var("RETRY_PERIOD_SECS");
    }
}
