use thiserror::Error;

/// Everything that can go wrong inside a single backend attempt.
///
/// These never cross the [`Backend::resolve`](crate::backends::Backend::resolve)
/// boundary; they exist so failures can be logged and inspected in tests.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("extraction engine failed: {0}")]
    Engine(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no backend chain for platform {0}")]
    NoMatch(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}
