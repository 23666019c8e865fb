//! In-memory loop state, gone on restart.

#[derive(Debug, Default)]
pub struct PollState {
    /// `from_date` for the API query. Stays 0, so every poll sees the full history.
    pub from_date: i64,
    /// Last text handed to Telegram, successful or not
    pub last_message: Option<String>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `text` as the latest message. Returns `false` if it equals the previous one.
    pub fn remember(&mut self, text: &str) -> bool {
        if self.last_message.as_deref() == Some(text) {
            return false;
        }
        self.last_message = Some(text.to_string());
        true
    }
}
