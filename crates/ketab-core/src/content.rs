//! Content structs serialized into the `content` field of each event.
//!
//! Field order is the wire order: `serde_json` emits fields in declaration
//! order, and absent optional fields are omitted rather than written as
//! `null`.

use serde::{Deserialize, Serialize};

/// Library event content (kind 38890).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryContent {
    /// Library name.
    pub name: String,
    /// Library description.
    pub description: String,
    /// Library website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    /// Library relay URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_url: Option<String>,
    /// Founder pubkey (librarian).
    pub founder_pubkey: String,
    /// Protocol version.
    pub protocol_version: String,
    /// Reference to library pubkey.
    pub ref_library_pubkey: String,
    /// Reference to library ID.
    pub ref_library_id: String,
    /// Reference to the clock pubkey the library anchors to.
    pub ref_clock_pubkey: String,
    /// Reference to block event identifier.
    pub ref_block_id: String,
    /// Total books.
    pub book_count: u64,
    /// Total unique readers.
    pub reader_count: u64,
    /// Total chapters across all books.
    pub chapter_count: u64,
}

/// Book event content (kind 38891).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookContent {
    /// Book title.
    pub title: String,
    /// Book subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Book description.
    pub description: String,
    /// Book dedication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedication: Option<String>,
    /// Author display name. Author identity is the event's pubkey.
    pub author: String,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// Published timestamp (unix seconds).
    pub published_at: u64,
    /// Number of chapters; must equal `chapters.len()`.
    pub chapter_count: u64,
    /// Ordered chapter addresses (`30023:<author_pubkey>:<d-tag>`).
    pub chapters: Vec<String>,
    /// Reference to book pubkey; must match the event's pubkey.
    pub ref_book_pubkey: String,
    /// Reference to book ID.
    pub ref_book_id: String,
    /// Reference to the author's primary library pubkey.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_library_pubkey: Option<String>,
    /// Reference to the author's primary library ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_library_id: Option<String>,
    /// Reference to block event identifier.
    pub ref_block_id: String,
}

/// Chapter event content (kind 30023).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    /// Chapter title.
    pub title: String,
    /// Published timestamp (unix seconds).
    pub published_at: u64,
    /// Chapter body (Markdown).
    pub body: String,
}

/// Library Entry event content (kind 38892).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntryContent {
    /// Personal notes about this book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Rating, 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Personal labels for organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Unix timestamp when added to the library.
    pub added_at: u64,
    /// Read status ("unread", "reading", "completed", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_status: Option<String>,
    /// Reference to library owner pubkey.
    pub ref_library_owner_pubkey: String,
    /// Reference to library ID.
    pub ref_library_id: String,
    /// Reference to book coordinate.
    pub ref_book_coordinate: String,
    /// Reference to book pubkey.
    pub ref_book_pubkey: String,
    /// Reference to book ID.
    pub ref_book_id: String,
    /// Reference to block event identifier.
    pub ref_block_id: String,
}
