//! Event kinds reserved by the Ketab Protocol.
//!
//! The protocol owns the replaceable range `38890..=38892` and borrows the
//! NIP-23 long-form kind for chapters.

/// Library event: book curation container (replaceable).
pub const KIND_LIBRARY: u32 = 38890;

/// Book event: book metadata and chapter ordering (replaceable).
pub const KIND_BOOK: u32 = 38891;

/// Library Entry event: a librarian's record of a curated book (replaceable).
pub const KIND_LIBRARY_ENTRY: u32 = 38892;

/// Chapter event, borrowed from NIP-23 long-form content.
pub const KIND_CHAPTER: u32 = 30023;

/// All kinds owned by the protocol.
pub const KETAB_KINDS: [u32; 3] = [KIND_LIBRARY, KIND_BOOK, KIND_LIBRARY_ENTRY];

/// Protocol version written into Library content.
pub const PROTOCOL_VERSION: &str = "0.1.0";

/// Returns true if `kind` is one of the protocol-owned kinds.
pub fn is_ketab_kind(kind: u32) -> bool {
    KETAB_KINDS.contains(&kind)
}
