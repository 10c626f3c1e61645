//! Builder inputs.
//!
//! These are the raw structs the validators inspect. `secret_key` is plain
//! bytes; its length is checked by the validator. Options do not implement
//! `Debug` so secret keys never reach log output.

use crate::content::{BookContent, ChapterContent, LibraryContent, LibraryEntryContent};

/// Inputs for a Library event (kind 38890).
#[derive(Clone)]
pub struct BuildLibraryEventOptions {
    /// Librarian's secret key (32 bytes).
    pub secret_key: Vec<u8>,
    /// Library slug.
    pub library_id: String,
    /// Library content.
    pub content: LibraryContent,
    /// Unix timestamp; defaults to now.
    pub created_at: Option<u64>,
}

/// Inputs for a Book event (kind 38891).
#[derive(Clone)]
pub struct BuildBookEventOptions {
    /// Author's secret key (32 bytes).
    pub secret_key: Vec<u8>,
    /// Book slug.
    pub book_id: String,
    /// Book content. `ref_book_pubkey` must be the pubkey of `secret_key`.
    pub content: BookContent,
    /// Unix timestamp; defaults to now.
    pub created_at: Option<u64>,
}

/// Inputs for a Library Entry event (kind 38892).
#[derive(Clone)]
pub struct BuildLibraryEntryEventOptions {
    /// Librarian's secret key (32 bytes).
    pub secret_key: Vec<u8>,
    /// Library owner pubkey.
    pub library_owner_pubkey: String,
    /// Slug of the curated book.
    pub book_slug: String,
    /// Pubkey of the book's author.
    pub book_author_pubkey: String,
    /// Library Entry content.
    pub content: LibraryEntryContent,
    /// Unix timestamp; defaults to now.
    pub created_at: Option<u64>,
}

/// Inputs for a Chapter event (kind 30023).
#[derive(Clone)]
pub struct BuildChapterEventOptions {
    /// Author's secret key (32 bytes).
    pub secret_key: Vec<u8>,
    /// Chapter d-tag.
    pub chapter_id: String,
    /// Slug of the parent book, written by the same author.
    pub book_slug: Option<String>,
    /// Chapter content.
    pub content: ChapterContent,
    /// Unix timestamp; defaults to now.
    pub created_at: Option<u64>,
}
