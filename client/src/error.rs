use thiserror::Error;

/// Errors surfaced by the service clients.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unsupported paste URL: {0}")]
    UnsupportedUrl(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Could not find team data in paste")]
    TeamNotFound,
}
