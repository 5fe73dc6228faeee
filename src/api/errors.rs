use thiserror::Error;

/// Failures raised by the backend collaborators.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not complete (connection, timeout, 5xx).
    #[error("network error: {0}")]
    Network(String),

    /// 401/422-class response: the caller's credential is invalid rather
    /// than the operation being retryable. Surfaced distinctly so the
    /// embedding application can trigger re-authentication; never retried.
    #[error("unauthorized")]
    Unauthorized,

    /// A response arrived but was not parseable as the expected shape.
    #[error("unexpected response shape: {0}")]
    BadResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Whether a manual retry of the same request is meaningful.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::BadResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
