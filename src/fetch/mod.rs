mod basic;
mod client;
mod headers;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use headers::BrowserHeaders;

use crate::config::Config;
use crate::error::PollError;
use reqwest::StatusCode;
use tracing::debug;

/// Builds the client used for the status endpoint: the configured timeout plus
/// browser-like headers.
pub fn browser_client(config: &Config) -> Result<BrowserHeaders<BasicClient>, PollError> {
    BrowserHeaders::new(BasicClient::new(config.timeout)?, &config.headers)
}

/// Sends one GET to `url` and returns the raw body.
///
/// Anything but `200 OK` is reported as [`PollError::Status`].
pub async fn fetch_status<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, PollError> {
    let url = url
        .parse()
        .map_err(|e| PollError::Client(format!("invalid URL {url}: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    debug!(status = status.as_u16(), "HTTP status");

    if status != StatusCode::OK {
        return Err(PollError::Status(status.as_u16()));
    }

    Ok(resp.bytes().await?.to_vec())
}
