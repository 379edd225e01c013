//! Partial-update merge over a full-replacement backend.
//!
//! The backend only accepts whole records, so a PATCH is applied by fetching
//! the canonical record, overlaying the present keys onto a copy, and
//! handing the merged copy back for validation and write. Overlays happen
//! on the copy, so a mismatch on any key leaves nothing half-written.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::catalog::ErrorMessage;
use crate::error::CoreError;

/// A presence-aware patch body for one record type.
pub trait Patchable: DeserializeOwned + Send {
    type Record: Clone + Send + Sync;

    /// Overlay every present key onto `record`, stopping at the first
    /// key whose value has the wrong shape.
    fn apply(self, record: &mut Self::Record) -> Result<(), CoreError>;
}

/// Why a canonical record could not be fetched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// The backend answered with a business error.
    #[error("backend rejected the fetch with status {status}: {}", error.message)]
    Rejected { status: u16, error: ErrorMessage },

    /// The backend could not be reached.
    #[error("backend call failed: {0}")]
    Transport(String),
}

impl From<FetchError> for CoreError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Rejected { status, error } => CoreError::CanonicalFetchFailed { status, error },
            FetchError::Transport(msg) => CoreError::Upstream(msg),
        }
    }
}

/// Where canonical records come from.
#[async_trait]
pub trait CanonicalSource<R>: Send + Sync {
    async fn fetch_canonical(&self, id: &str) -> Result<R, FetchError>;
}

/// Decode a patch body. An empty body is an empty patch.
pub fn decode_patch<P: DeserializeOwned>(raw_body: &[u8]) -> Result<P, CoreError> {
    if raw_body.iter().all(u8::is_ascii_whitespace) {
        return decode_object(b"{}");
    }
    decode_object(raw_body)
}

/// Decode a JSON body that must be an object.
///
/// Derived struct visitors also accept arrays and bind them by position,
/// so the top-level shape is checked before `T` sees the value.
pub fn decode_object<T: DeserializeOwned>(raw_body: &[u8]) -> Result<T, CoreError> {
    let value: serde_json::Value =
        serde_json::from_slice(raw_body).map_err(|e| CoreError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(CoreError::Decode(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| CoreError::Decode(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Overlay `patch` onto a copy of `canonical`.
pub fn merge_patch<P: Patchable>(canonical: &P::Record, patch: P) -> Result<P::Record, CoreError> {
    let mut merged = canonical.clone();
    patch.apply(&mut merged)?;
    Ok(merged)
}

/// Fetch the canonical record for `id` and merge `patch` onto it.
///
/// Fetch failures are relayed verbatim; no merge is attempted.
pub async fn bind_partial_update<P, S>(source: &S, id: &str, patch: P) -> Result<P::Record, CoreError>
where
    P: Patchable,
    S: CanonicalSource<P::Record> + ?Sized,
{
    let canonical = source.fetch_canonical(id).await.map_err(|err| {
        tracing::warn!(id, error = %err, "Canonical record fetch failed");
        CoreError::from(err)
    })?;
    merge_patch(&canonical, patch)
}
