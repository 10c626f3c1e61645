use thiserror::Error;

/// Validation errors raised before any Ketab record is constructed.
///
/// Every variant names the offending field so callers can surface it
/// directly (`content.founder_pubkey`, `book_slug`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The secret key is not exactly 32 bytes long.
    #[error("secret_key must be exactly 32 bytes (got {len})")]
    SecretKeyLength {
        /// Length of the supplied key.
        len: usize,
    },
    /// A required string is empty or whitespace only.
    #[error("{field} is required and must be a non-empty string")]
    Missing {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// A pubkey-typed field is not 64 lowercase hex characters.
    #[error("{field} ('{value}') must be a 64-character lowercase hex pubkey")]
    InvalidPubkey {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A list that must carry at least one element is empty.
    #[error("{field} must be a non-empty list")]
    EmptyList {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// A declared count disagrees with the length of the list it describes.
    #[error("{field} declares {declared} entries but {actual} were supplied")]
    CountMismatch {
        /// Field name holding the declared count.
        field: &'static str,
        /// Declared count.
        declared: u64,
        /// Actual list length.
        actual: usize,
    },
    /// When a numeric value exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::SecretKeyLength { .. } => "secret_key",
            ValidationError::Missing { field }
            | ValidationError::InvalidPubkey { field, .. }
            | ValidationError::PatternMismatch { field, .. }
            | ValidationError::EmptyList { field }
            | ValidationError::CountMismatch { field, .. }
            | ValidationError::OutOfBounds { field, .. } => field,
        }
    }
}
