use crate::error::PollError;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

/// One GET against the homework-status endpoint, no retries.
///
/// The body comes back as untyped JSON; shape checks are left to
/// [`check_response`](super::check_response).
#[tracing::instrument(skip(client, endpoint, token), fields(endpoint = %endpoint))]
pub async fn fetch_homework_statuses(
    client: &Client,
    endpoint: &Url,
    token: &str,
    from_date: i64,
) -> Result<Value, PollError> {
    tracing::debug!("requesting homework statuses");

    let resp = client
        .get(endpoint.clone())
        .header(AUTHORIZATION, format!("OAuth {}", token))
        .query(&[("from_date", from_date)])
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(PollError::HttpStatus(status));
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| PollError::JsonDecode(e.to_string()))
}
