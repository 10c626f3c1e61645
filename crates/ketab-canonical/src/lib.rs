//! Canonical primitives for Ketab Protocol events.
//!
//! Kind numbers, identifier and coordinate formatting, the unsigned and
//! signed record shapes, and event-id hashing live in this crate. Anything
//! that decides how an event names itself or another event is defined here
//! once and shared by every builder.
//!
#![deny(missing_docs)]

/// Event ID computation over the serialized commitment.
pub mod event_id;
/// Identifier newtypes, id policy, and coordinate formatting.
pub mod identifiers;
/// Kind numbers and protocol constants.
pub mod kinds;
/// Unsigned and signed record shapes plus tag helpers.
pub mod record;
/// Validation error shared by every input check.
pub mod validation;

pub use event_id::{commitment_bytes, compute_event_id, event_digest, verify_event_id, EventIdError};
pub use identifiers::{
    book_address, canonical_id, chapter_address, coordinate, entry_slug, library_address,
    Coordinate, Entity, EventId, IdPolicy, Pubkey, SignatureHex, NAMESPACE,
};
pub use kinds::{
    is_ketab_kind, KETAB_KINDS, KIND_BOOK, KIND_CHAPTER, KIND_LIBRARY, KIND_LIBRARY_ENTRY,
    PROTOCOL_VERSION,
};
pub use record::{tag, tag_values, SignedEvent, Tag, UnsignedEvent};
pub use validation::ValidationError;
