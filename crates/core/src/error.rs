use crate::catalog::{ErrorEntry, ErrorMessage};

/// Failure of any stage of the request-binding pipeline.
///
/// Every variant carries enough to render the client-facing
/// `{code, message, details}` body; the HTTP layer owns the status mapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// The raw request could not be decoded into the destination shape.
    #[error("Request decode failed: {0}")]
    Decode(String),

    /// A server-side contract was broken (misconfigured route, unserializable record).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Authentication failed before any binding happened.
    #[error("Unauthorized: {}", .0.code())]
    Unauthorized(ErrorEntry),

    /// The route identity of a partial update is missing or malformed.
    #[error("Route identity missing or malformed: {}", .0.code())]
    IdentityMissing(ErrorEntry),

    /// The backend rejected the canonical-record fetch; relayed verbatim.
    #[error("Canonical record fetch failed with status {status}: {}", error.message)]
    CanonicalFetchFailed { status: u16, error: ErrorMessage },

    /// The backend could not be reached or answered with garbage.
    #[error("Backend unavailable: {0}")]
    Upstream(String),

    /// A patchable key was present with a value of the wrong dynamic shape.
    #[error("Field '{field}' has an incorrect type")]
    FieldTypeMismatch {
        field: &'static str,
        entry: ErrorEntry,
    },

    /// Structural validation failed; the message is already translated.
    #[error("Validation failed: {}", .0.details)]
    Validation(ErrorMessage),

    /// A business rule rejected an otherwise well-formed request.
    #[error("Request rejected: {}", .0.code())]
    Rejected(ErrorEntry),
}

impl CoreError {
    /// The client-facing error body for this failure.
    ///
    /// Only validation failures carry `details`; everything else uses the
    /// static catalog text.
    pub fn to_message(&self) -> ErrorMessage {
        use crate::catalog as c;

        match self {
            CoreError::Decode(_) => c::REQUEST_PARAMS_INCORRECT.to_message(),
            CoreError::Internal(_) => c::INTERNAL.to_message(),
            CoreError::Upstream(_) => c::UNKNOWN.to_message(),
            CoreError::Unauthorized(entry)
            | CoreError::IdentityMissing(entry)
            | CoreError::Rejected(entry)
            | CoreError::FieldTypeMismatch { entry, .. } => entry.to_message(),
            CoreError::CanonicalFetchFailed { error, .. } => error.clone(),
            CoreError::Validation(message) => message.clone(),
        }
    }
}
