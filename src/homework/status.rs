use crate::error::PollError;
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => {
                "The work has been reviewed: the reviewer liked everything. Hooray!"
            }
            HomeworkStatus::Reviewing => "The work has been taken for review by the reviewer.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has some remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self, PollError> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(PollError::UnknownStatus(Some(other.to_string()))),
        }
    }
}

impl Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        };

        write!(f, "{}", s)
    }
}

/// Turn one homework record into the chat message for its current status.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(PollError::NoHomeworkName)?;

    let status: HomeworkStatus = match homework.get("status") {
        Some(Value::String(s)) => s.parse()?,
        None | Some(Value::Null) => return Err(PollError::UnknownStatus(None)),
        Some(other) => return Err(PollError::UnknownStatus(Some(other.to_string()))),
    };

    Ok(format!("Changed review status for \"{}\". {}", name, status.verdict()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_known_status_gets_its_verdict() {
        for status in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            let record = json!({ "homework_name": "hw05_final", "status": status.to_string() });
            let msg = parse_status(&record).unwrap();
            assert!(msg.contains("\"hw05_final\""), "{msg}");
            assert!(msg.ends_with(status.verdict()), "{msg}");
        }
    }

    #[test]
    fn approved_message_text() {
        let msg = parse_status(&json!({ "homework_name": "task1", "status": "approved" })).unwrap();
        assert_eq!(
            msg,
            "Changed review status for \"task1\". \
             The work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn missing_name() {
        let err = parse_status(&json!({ "status": "approved" })).unwrap_err();
        assert!(matches!(err, PollError::NoHomeworkName));

        let err = parse_status(&json!({ "homework_name": 17, "status": "approved" })).unwrap_err();
        assert!(matches!(err, PollError::NoHomeworkName));

        // not even an object
        assert!(matches!(parse_status(&json!("task1")), Err(PollError::NoHomeworkName)));
    }

    #[test]
    fn name_is_checked_before_status() {
        let err = parse_status(&json!({ "status": "bogus" })).unwrap_err();
        assert!(matches!(err, PollError::NoHomeworkName));
    }

    #[test]
    fn undocumented_status() {
        let err = parse_status(&json!({ "homework_name": "t", "status": "Approved" })).unwrap_err();
        assert!(matches!(err, PollError::UnknownStatus(Some(s)) if s == "Approved"));

        let err = parse_status(&json!({ "homework_name": "t", "status": 1 })).unwrap_err();
        assert!(matches!(err, PollError::UnknownStatus(Some(_))));
    }

    #[test]
    fn absent_status() {
        for record in [
            json!({ "homework_name": "t" }),
            json!({ "homework_name": "t", "status": null }),
        ] {
            let err = parse_status(&record).unwrap_err();
            assert!(matches!(err, PollError::UnknownStatus(None)));
            assert!(err.to_string().contains("(none)"));
        }
    }
}
