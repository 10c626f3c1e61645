//! Fail-fast input validation.
//!
//! Each `validate_*_options` function checks the secret key first, then the
//! builder-level identifying fields, then the content: pubkey-typed fields,
//! required strings, optional strings, and finally entity-specific
//! structure. The first failure is returned; nothing is accumulated.
//!
//! Numeric content fields are `u64`, so "present and not NaN" holds by
//! construction and needs no runtime check.

use std::sync::OnceLock;

use ketab_canonical::{Coordinate, Pubkey, ValidationError, KIND_BOOK, KIND_CHAPTER};
use regex::Regex;

use crate::content::{BookContent, ChapterContent, LibraryContent, LibraryEntryContent};
use crate::options::{
    BuildBookEventOptions, BuildChapterEventOptions, BuildLibraryEntryEventOptions,
    BuildLibraryEventOptions,
};

/// Required secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Lowest accepted entry rating.
pub const RATING_MIN: u8 = 1;
/// Highest accepted entry rating.
pub const RATING_MAX: u8 = 5;

fn http_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https?://\S+$").expect("invalid regex"))
}

fn relay_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^wss?://\S+$").expect("invalid regex"))
}

fn require_secret_key(secret_key: &[u8]) -> Result<(), ValidationError> {
    if secret_key.len() != SECRET_KEY_LEN {
        return Err(ValidationError::SecretKeyLength {
            len: secret_key.len(),
        });
    }
    Ok(())
}

fn require_string(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(())
}

/// Absent is fine; present must not be blank.
fn require_optional_string(
    value: Option<&str>,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::PatternMismatch {
            field,
            value: v.to_string(),
        }),
        _ => Ok(()),
    }
}

fn require_pubkey(value: &str, field: &'static str) -> Result<(), ValidationError> {
    require_string(value, field)?;
    Pubkey::parse_field(value, field).map(|_| ())
}

fn require_optional_pubkey(
    value: Option<&str>,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_pubkey(v, field),
        None => Ok(()),
    }
}

fn require_url(
    value: Option<&str>,
    field: &'static str,
    pattern: &Regex,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if !pattern.is_match(v) => Err(ValidationError::PatternMismatch {
            field,
            value: v.to_string(),
        }),
        _ => Ok(()),
    }
}

fn require_coordinate(value: &str, field: &'static str, kind: u32) -> Result<(), ValidationError> {
    let parsed = Coordinate::parse_field(value, field)?;
    if parsed.kind != kind {
        return Err(ValidationError::PatternMismatch {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validates Library content.
pub fn validate_library_content(content: &LibraryContent) -> Result<(), ValidationError> {
    require_pubkey(&content.founder_pubkey, "content.founder_pubkey")?;
    require_pubkey(&content.ref_library_pubkey, "content.ref_library_pubkey")?;
    require_pubkey(&content.ref_clock_pubkey, "content.ref_clock_pubkey")?;

    require_string(&content.name, "content.name")?;
    require_string(&content.description, "content.description")?;
    require_string(&content.protocol_version, "content.protocol_version")?;
    require_string(&content.ref_library_id, "content.ref_library_id")?;
    require_string(&content.ref_block_id, "content.ref_block_id")?;

    require_url(content.website_url.as_deref(), "content.website_url", http_url())?;
    require_url(content.relay_url.as_deref(), "content.relay_url", relay_url())?;
    Ok(())
}

/// Validates Book content, including the chapter list.
pub fn validate_book_content(content: &BookContent) -> Result<(), ValidationError> {
    require_pubkey(&content.ref_book_pubkey, "content.ref_book_pubkey")?;
    require_optional_pubkey(
        content.ref_library_pubkey.as_deref(),
        "content.ref_library_pubkey",
    )?;

    require_string(&content.title, "content.title")?;
    require_string(&content.description, "content.description")?;
    require_string(&content.author, "content.author")?;
    require_string(&content.ref_book_id, "content.ref_book_id")?;
    require_string(&content.ref_block_id, "content.ref_block_id")?;

    require_optional_string(content.subtitle.as_deref(), "content.subtitle")?;
    require_optional_string(content.dedication.as_deref(), "content.dedication")?;
    require_optional_string(content.ref_library_id.as_deref(), "content.ref_library_id")?;
    require_url(
        content.cover_image_url.as_deref(),
        "content.cover_image_url",
        http_url(),
    )?;
    // A library reference is a pubkey and an id together.
    if content.ref_library_pubkey.is_some() && content.ref_library_id.is_none() {
        return Err(ValidationError::Missing {
            field: "content.ref_library_id",
        });
    }
    if content.ref_library_id.is_some() && content.ref_library_pubkey.is_none() {
        return Err(ValidationError::Missing {
            field: "content.ref_library_pubkey",
        });
    }

    if content.chapters.is_empty() {
        return Err(ValidationError::EmptyList {
            field: "content.chapters",
        });
    }
    if content.chapter_count != content.chapters.len() as u64 {
        return Err(ValidationError::CountMismatch {
            field: "content.chapter_count",
            declared: content.chapter_count,
            actual: content.chapters.len(),
        });
    }
    for chapter in &content.chapters {
        require_coordinate(chapter, "content.chapters", KIND_CHAPTER)?;
    }
    Ok(())
}

/// Validates Library Entry content.
pub fn validate_entry_content(content: &LibraryEntryContent) -> Result<(), ValidationError> {
    require_pubkey(
        &content.ref_library_owner_pubkey,
        "content.ref_library_owner_pubkey",
    )?;
    require_pubkey(&content.ref_book_pubkey, "content.ref_book_pubkey")?;

    require_string(&content.ref_library_id, "content.ref_library_id")?;
    require_string(&content.ref_book_coordinate, "content.ref_book_coordinate")?;
    require_string(&content.ref_book_id, "content.ref_book_id")?;
    require_string(&content.ref_block_id, "content.ref_block_id")?;

    require_optional_string(content.read_status.as_deref(), "content.read_status")?;
    if let Some(rating) = content.rating {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ValidationError::OutOfBounds {
                field: "content.rating",
                value: rating.to_string(),
            });
        }
    }

    require_coordinate(
        &content.ref_book_coordinate,
        "content.ref_book_coordinate",
        KIND_BOOK,
    )?;
    Ok(())
}

/// Validates Chapter content.
pub fn validate_chapter_content(content: &ChapterContent) -> Result<(), ValidationError> {
    require_string(&content.title, "content.title")?;
    require_string(&content.body, "content.body")?;
    Ok(())
}

/// Validates Library builder inputs.
pub fn validate_library_options(
    options: &BuildLibraryEventOptions,
) -> Result<(), ValidationError> {
    require_secret_key(&options.secret_key)?;
    require_string(&options.library_id, "library_id")?;
    validate_library_content(&options.content)
}

/// Validates Book builder inputs.
pub fn validate_book_options(options: &BuildBookEventOptions) -> Result<(), ValidationError> {
    require_secret_key(&options.secret_key)?;
    require_string(&options.book_id, "book_id")?;
    validate_book_content(&options.content)
}

/// Validates Library Entry builder inputs.
pub fn validate_entry_options(
    options: &BuildLibraryEntryEventOptions,
) -> Result<(), ValidationError> {
    require_secret_key(&options.secret_key)?;
    require_pubkey(&options.library_owner_pubkey, "library_owner_pubkey")?;
    require_pubkey(&options.book_author_pubkey, "book_author_pubkey")?;
    require_string(&options.book_slug, "book_slug")?;
    validate_entry_content(&options.content)
}

/// Validates Chapter builder inputs.
pub fn validate_chapter_options(
    options: &BuildChapterEventOptions,
) -> Result<(), ValidationError> {
    require_secret_key(&options.secret_key)?;
    require_string(&options.chapter_id, "chapter_id")?;
    require_optional_string(options.book_slug.as_deref(), "book_slug")?;
    validate_chapter_content(&options.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PK: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

    fn make_book_content() -> BookContent {
        BookContent {
            title: "Dune".into(),
            subtitle: None,
            description: "Desert planet".into(),
            dedication: None,
            author: "Frank".into(),
            cover_image_url: None,
            published_at: 1_700_000_000,
            chapter_count: 2,
            chapters: vec![format!("30023:{}:ch-1", PK), format!("30023:{}:ch-2", PK)],
            ref_book_pubkey: PK.into(),
            ref_book_id: "dune".into(),
            ref_library_pubkey: None,
            ref_library_id: None,
            ref_block_id: "block-1".into(),
        }
    }

    #[test]
    fn blank_string_is_missing() {
        let err = require_string("   ", "content.name").unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "content.name" });
    }

    #[test]
    fn empty_pubkey_reports_missing_before_format() {
        let err = require_pubkey("", "content.founder_pubkey").unwrap_err();
        assert!(matches!(err, ValidationError::Missing { .. }));
        let err = require_pubkey("abc", "content.founder_pubkey").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPubkey { .. }));
    }

    #[test]
    fn chapter_count_must_match_list() {
        let mut content = make_book_content();
        content.chapter_count = 3;
        let err = validate_book_content(&content).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountMismatch {
                field: "content.chapter_count",
                declared: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn chapters_must_be_chapter_coordinates() {
        let mut content = make_book_content();
        content.chapters[1] = format!("38891:{}:dune", PK);
        let err = validate_book_content(&content).unwrap_err();
        assert_eq!(err.field(), "content.chapters");
    }

    #[test]
    fn library_reference_needs_both_halves() {
        let mut content = make_book_content();
        content.ref_library_pubkey = Some(PK.into());
        let err = validate_book_content(&content).unwrap_err();
        assert_eq!(err.field(), "content.ref_library_id");

        content.ref_library_id = Some("alexandria".into());
        assert!(validate_book_content(&content).is_ok());
    }

    #[test]
    fn urls_are_scheme_checked() {
        let relay = "content.relay_url";
        assert!(require_url(Some("wss://relay.example"), relay, relay_url()).is_ok());
        assert!(require_url(Some("https://relay.example"), relay, relay_url()).is_err());
        assert!(require_url(None, relay, relay_url()).is_ok());
        assert!(require_url(Some("https://x.example/a"), "content.website_url", http_url()).is_ok());
    }
}
