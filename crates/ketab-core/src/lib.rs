//! Event construction and validation for the Ketab Protocol.
//!
//! This crate provides:
//! - Content structs for Library, Book, Library Entry and Chapter events
//! - Fail-fast validators for builder inputs
//! - Builders that turn validated inputs into unsigned records
//! - A signing adapter over BIP-340 Schnorr signatures
//! - Conformance checks for received signed events
//!
//! Core invariants:
//! - The first tag of every built event is its `d` tag
//! - Identifiers and coordinates are formatted only by `ketab-canonical`
//! - `content` is the JSON serialization of the typed content struct
//! - Identical inputs with an explicit `created_at` build identical records
//!
//! ## Quick Start
//!
//! ```rust
//! use ketab_core::{
//!     build_library_event, derive_pubkey, sign_event, verify_event,
//!     BuildLibraryEventOptions, LibraryContent,
//! };
//!
//! let secret_key = vec![7u8; 32];
//! let librarian = derive_pubkey(&secret_key)?;
//!
//! let content = LibraryContent {
//!     name: "Alexandria".into(),
//!     description: "Scrolls".into(),
//!     website_url: None,
//!     relay_url: None,
//!     founder_pubkey: librarian.clone(),
//!     protocol_version: ketab_canonical::PROTOCOL_VERSION.into(),
//!     ref_library_pubkey: librarian.clone(),
//!     ref_library_id: "alexandria".into(),
//!     ref_clock_pubkey: librarian.clone(),
//!     ref_block_id: "block-1".into(),
//!     book_count: 0,
//!     reader_count: 0,
//!     chapter_count: 0,
//! };
//!
//! let event = build_library_event(&BuildLibraryEventOptions {
//!     secret_key: secret_key.clone(),
//!     library_id: "alexandria".into(),
//!     content,
//!     created_at: Some(1_700_000_000),
//! })?;
//! assert_eq!(event.tags[0], vec!["d", "alexandria"]);
//!
//! let signed = sign_event(&event, &secret_key)?;
//! assert!(verify_event(&signed));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
#![deny(missing_docs)]

/// Event builders and the configurable factory.
pub mod builders;
/// Build configuration.
pub mod config;
/// Shape checks for received signed events.
pub mod conformance;
/// Content structs serialized into event content.
pub mod content;
/// Error types for builder operations.
pub mod errors;
/// Builder input structs.
pub mod options;
/// Signing adapter.
pub mod signing;
/// Fail-fast input validators.
pub mod validate;

pub use builders::book::build_book_event;
pub use builders::chapter::build_chapter_event;
pub use builders::entry::build_library_entry_event;
pub use builders::library::build_library_event;
pub use builders::EventFactory;
pub use config::BuildConfig;
pub use conformance::{check_event, ConformanceError};
pub use content::{BookContent, ChapterContent, LibraryContent, LibraryEntryContent};
pub use errors::BuildError;
pub use options::{
    BuildBookEventOptions, BuildChapterEventOptions, BuildLibraryEntryEventOptions,
    BuildLibraryEventOptions,
};
pub use signing::{
    check_signature, derive_pubkey, secret_key_from_hex, secret_key_to_hex, sign_event,
    verify_event, SigningError,
};
pub use validate::{
    validate_book_options, validate_chapter_options, validate_entry_options,
    validate_library_options,
};
