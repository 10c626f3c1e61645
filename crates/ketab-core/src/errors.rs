use thiserror::Error;

/// Errors returned by the event builders.
///
/// Validation runs before any derivation, so a `Validation` error means no
/// part of the record was built. Signing adapter failures pass through
/// untouched.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Input rejected by a validator.
    #[error(transparent)]
    Validation(#[from] ketab_canonical::ValidationError),
    /// Key derivation failed in the signing adapter.
    #[error(transparent)]
    Signing(#[from] crate::signing::SigningError),
    /// Content could not be serialized.
    #[error("content serialization failed: {0}")]
    Content(#[from] serde_json::Error),
}
