//! Service functions bridging forms and collaborators.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::FieldErrors;

pub mod feed;
pub mod profile;

/// Failures surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client-side validation rejected the input; the map carries every
    /// field message. Nothing was sent over the network.
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Whether the failure requires the external re-authentication flow.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Api(ApiError::Unauthorized))
    }
}
