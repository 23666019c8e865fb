mod config;
mod error;
mod homework;
mod poll;
mod telegram;

use anyhow::Result;
use config::BotConfig;
use telegram::TelegramBot;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "environment is not configured, giving up");
            return Err(e.into());
        }
    };
    tracing::info!(config = ?config.redacted(), "configuration loaded");

    let client = reqwest::Client::new();
    let bot = TelegramBot::new(
        client.clone(),
        config.telegram_api_base.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    tracing::info!(endpoint = %config.endpoint, "Starting homework status bot…");
    poll::run_poll_loop(&client, &config, &bot).await;

    Ok(())
}

/// Timestamped lines on stdout with module, file:line, level and span context
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("homework_notifier=debug")),
        )
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}
