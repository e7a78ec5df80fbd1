use thiserror::Error;

/// Errors originating from a [`crate::TakeoffClient`].
#[derive(Debug, Error)]
pub enum TakeoffError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response missing generated text")]
    MissingText,
}
