//! Poll the homework API forever and report changes to the chat.

use crate::config::BotConfig;
use crate::error::PollError;
use crate::homework::{check_response, fetch_homework_statuses, parse_status};
use crate::telegram::TelegramBot;
use reqwest::Client;
use tokio::time::sleep;

mod state;

pub use state::PollState;

pub async fn run_poll_loop(client: &Client, config: &BotConfig, bot: &TelegramBot) {
    let mut state = PollState::new();

    loop {
        poll_once(client, config, bot, &mut state).await;

        tracing::debug!(secs = config.retry_period.as_secs(), "sleeping until next poll");
        sleep(config.retry_period).await;
    }
}

/// One iteration without the sleep. Never fails; errors end up in the log and,
/// unless routine, in the chat.
#[tracing::instrument(skip_all, fields(from_date = state.from_date))]
pub async fn poll_once(
    client: &Client,
    config: &BotConfig,
    bot: &TelegramBot,
    state: &mut PollState,
) {
    match check_homeworks(client, config, bot, state).await {
        Ok(()) => {}
        Err(PollError::MissingHomeworks) => {
            tracing::warn!("{}", PollError::MissingHomeworks);
        }
        Err(e) => {
            tracing::error!(error = ?e, "poll iteration failed: {e}");
            let message = failure_message(&e);
            notify_if_changed(bot, state, &message).await;
        }
    }
}

async fn check_homeworks(
    client: &Client,
    config: &BotConfig,
    bot: &TelegramBot,
    state: &mut PollState,
) -> Result<(), PollError> {
    let response =
        fetch_homework_statuses(client, &config.endpoint, &config.practicum_token, state.from_date)
            .await?;
    let homeworks = check_response(response)?;

    if homeworks.is_empty() {
        tracing::debug!("no homework statuses in the response");
    }

    for homework in &homeworks {
        let message = parse_status(homework)?;
        notify_if_changed(bot, state, &message).await;
    }

    Ok(())
}

async fn notify_if_changed(bot: &TelegramBot, state: &mut PollState, message: &str) {
    if state.remember(message) {
        bot.send_message(message).await;
    } else {
        tracing::debug!("same message as last time, not sending");
    }
}

fn failure_message(error: &PollError) -> String {
    format!("Program malfunction: {}.", error)
}
