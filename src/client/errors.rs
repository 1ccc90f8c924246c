use thiserror::Error;

pub use reqwest::StatusCode;

/// Failures raised by the catalog client. None of them is retried; every
/// error is terminal for the triggering request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, timeout).
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog service answered with a non-2xx status.
    #[error("catalog service returned {0}")]
    Status(StatusCode),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode catalog payload: {0}")]
    Decode(String),

    /// The requested entity does not exist (404).
    #[error("not found")]
    NotFound,
}

pub type ClientResult<T> = Result<T, ClientError>;
