//! Shape checks for received signed events.
//!
//! These checks look at the structure of an event that arrived from
//! elsewhere: identifier formats, required tags, and whether `content`
//! parses into the typed content struct and passes the same content
//! validators the builders use. Signature validity is a separate question;
//! see [`verify_event`](crate::signing::verify_event).

use ketab_canonical::{
    Coordinate, EventId, Pubkey, SignatureHex, SignedEvent, ValidationError, KIND_BOOK,
    KIND_CHAPTER, KIND_LIBRARY, KIND_LIBRARY_ENTRY,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::content::{BookContent, ChapterContent, LibraryContent, LibraryEntryContent};
use crate::validate::{
    validate_book_content, validate_chapter_content, validate_entry_content,
    validate_library_content,
};

/// Reasons a received event does not conform to the protocol.
#[derive(Error, Debug)]
pub enum ConformanceError {
    /// The kind is not handled by this protocol.
    #[error("unknown Ketab Protocol kind: {0}")]
    UnknownKind(u32),
    /// The first tag is not a non-empty `d` tag.
    #[error("first tag must be a non-empty 'd' tag")]
    MissingIdentifier,
    /// Too few tags of a given name.
    #[error("expected at least {expected} '{tag}' tag(s), found {found}")]
    TagCount {
        /// Tag name.
        tag: &'static str,
        /// Minimum required.
        expected: usize,
        /// Number present.
        found: usize,
    },
    /// No `a` tag points at the required kind.
    #[error("missing 'a' tag referencing kind {kind}")]
    MissingCoordinate {
        /// Kind the coordinate must reference.
        kind: u32,
    },
    /// `content` is not valid JSON for the kind's content struct.
    #[error("content must be valid JSON for kind {kind}: {reason}")]
    InvalidContent {
        /// Event kind.
        kind: u32,
        /// Parser message.
        reason: String,
    },
    /// A field failed validation.
    #[error(transparent)]
    Field(#[from] ValidationError),
    /// `ref_book_pubkey` differs from the event's pubkey.
    #[error("ref_book_pubkey must match event pubkey (author identity)")]
    AuthorMismatch,
}

fn parse_content<T: DeserializeOwned>(event: &SignedEvent) -> Result<T, ConformanceError> {
    serde_json::from_str(&event.content).map_err(|e| ConformanceError::InvalidContent {
        kind: event.kind,
        reason: e.to_string(),
    })
}

fn require_tag_count(
    event: &SignedEvent,
    tag: &'static str,
    expected: usize,
) -> Result<(), ConformanceError> {
    let found = event.tag_values(tag).count();
    if found < expected {
        return Err(ConformanceError::TagCount {
            tag,
            expected,
            found,
        });
    }
    Ok(())
}

fn require_coordinate_tag(event: &SignedEvent, kind: u32) -> Result<(), ConformanceError> {
    let present = event
        .tag_values("a")
        .filter_map(|value| Coordinate::parse(value).ok())
        .any(|coordinate| coordinate.kind == kind);
    if !present {
        return Err(ConformanceError::MissingCoordinate { kind });
    }
    Ok(())
}

/// Checks a received event against the rules for its kind.
pub fn check_event(event: &SignedEvent) -> Result<(), ConformanceError> {
    let result = check_event_inner(event);
    if let Err(err) = &result {
        tracing::warn!(kind = event.kind, id = %event.id, error = %err, "nonconforming event");
    }
    result
}

fn check_event_inner(event: &SignedEvent) -> Result<(), ConformanceError> {
    if !matches!(
        event.kind,
        KIND_LIBRARY | KIND_BOOK | KIND_LIBRARY_ENTRY | KIND_CHAPTER
    ) {
        return Err(ConformanceError::UnknownKind(event.kind));
    }

    EventId::parse_field(event.id.as_str(), "id")?;
    Pubkey::parse_field(event.pubkey.as_str(), "pubkey")?;
    SignatureHex::parse_field(event.sig.as_str(), "sig")?;

    match event.tags.first() {
        Some(first) if first.len() >= 2 && first[0] == "d" && !first[1].trim().is_empty() => {}
        _ => return Err(ConformanceError::MissingIdentifier),
    }

    match event.kind {
        KIND_LIBRARY => {
            require_tag_count(event, "p", 2)?;
            let content: LibraryContent = parse_content(event)?;
            validate_library_content(&content)?;
        }
        KIND_BOOK => {
            require_tag_count(event, "p", 1)?;
            let content: BookContent = parse_content(event)?;
            validate_book_content(&content)?;
            if content.ref_book_pubkey != event.pubkey {
                return Err(ConformanceError::AuthorMismatch);
            }
        }
        KIND_LIBRARY_ENTRY => {
            require_coordinate_tag(event, KIND_BOOK)?;
            require_coordinate_tag(event, KIND_LIBRARY)?;
            require_tag_count(event, "p", 2)?;
            let content: LibraryEntryContent = parse_content(event)?;
            validate_entry_content(&content)?;
        }
        _ => {
            let content: ChapterContent = parse_content(event)?;
            validate_chapter_content(&content)?;
        }
    }
    Ok(())
}
