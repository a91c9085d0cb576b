//! Failures that can stop a poll from producing a count.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    /// The HTTP client could not be built (bad header value, TLS backend).
    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// Connection refused, DNS failure, timeout or a broken body stream.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("could not parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The payload had a `connectors` key that is not a list.
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

impl PollError {
    /// Short name of the step that failed, used as a log field.
    pub fn stage(&self) -> &'static str {
        match self {
            PollError::Client(_) | PollError::Transport(_) => "fetch",
            PollError::Status(_) => "status",
            PollError::Parse(_) => "parse",
            PollError::Shape(_) => "interpret",
        }
    }
}
