use takeoff::TakeoffError;
use thiserror::Error;

/// Errors surfaced by a generator component.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error(transparent)]
    Client(#[from] TakeoffError),
}
