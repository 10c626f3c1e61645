//! Event ID computation.
//!
//! Event IDs are computed as: `sha256(serialize([0, pubkey, created_at, kind, tags, content]))`
//! where the serialization is compact JSON with no whitespace.

use sha2::{Digest as Sha2Digest, Sha256};

use crate::identifiers::EventId;
use crate::record::{SignedEvent, UnsignedEvent};

/// Leading element of the serialized commitment.
const COMMITMENT_VERSION: u8 = 0;

/// Serializes the commitment array that the event id hashes.
///
/// # Errors
///
/// Returns [`EventIdError`] if serialization fails.
pub fn commitment_bytes(event: &UnsignedEvent) -> Result<Vec<u8>, EventIdError> {
    let commitment = (
        COMMITMENT_VERSION,
        &event.pubkey,
        event.created_at,
        event.kind,
        &event.tags,
        &event.content,
    );
    serde_json::to_vec(&commitment).map_err(|e| EventIdError::Serialization(e.to_string()))
}

/// Raw 32-byte digest of the commitment; this is the message that gets signed.
pub fn event_digest(event: &UnsignedEvent) -> Result<[u8; 32], EventIdError> {
    let bytes = commitment_bytes(event)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hasher.finalize().into())
}

/// Computes the event ID for an unsigned record.
///
/// # Example
///
/// ```rust
/// use ketab_canonical::{compute_event_id, UnsignedEvent};
///
/// let event = UnsignedEvent {
///     pubkey: "ab".repeat(32),
///     created_at: 1_700_000_000,
///     kind: 38890,
///     tags: vec![vec!["d".into(), "alexandria".into()]],
///     content: "{}".into(),
/// };
///
/// let event_id = compute_event_id(&event)?;
/// assert_eq!(event_id.as_str().len(), 64);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`EventIdError`] if serialization fails.
pub fn compute_event_id(event: &UnsignedEvent) -> Result<EventId, EventIdError> {
    let digest = event_digest(event)?;
    Ok(EventId::new(hex::encode(digest)))
}

/// Verifies that a signed event's claimed id matches its content.
///
/// Returns `true` if the claimed ID matches the computed ID, `false` otherwise.
pub fn verify_event_id(event: &SignedEvent) -> Result<bool, EventIdError> {
    let computed = compute_event_id(&event.unsigned())?;
    Ok(computed.as_str() == event.id)
}

/// Error during event ID computation.
#[derive(thiserror::Error, Debug)]
pub enum EventIdError {
    /// Serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
