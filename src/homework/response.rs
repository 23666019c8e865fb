use crate::error::PollError;
use serde_json::Value;

/// Pull the `homeworks` list out of a decoded API answer.
///
/// Absent (or `null`) key and wrong-typed key are reported separately:
/// the former is routine, the latter means the API contract is broken.
pub fn check_response(response: Value) -> Result<Vec<Value>, PollError> {
    let Value::Object(mut map) = response else {
        return Err(PollError::NotAnObject);
    };

    match map.remove("homeworks") {
        None | Some(Value::Null) => Err(PollError::MissingHomeworks),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(PollError::MalformedHomeworks),
    }
}
