//! Homework-review API: request, response shape, status verdicts.

mod client;
mod response;
mod status;

pub use client::fetch_homework_statuses;
pub use response::check_response;
pub use status::parse_status;
