//! Identifier and coordinate formatting.
//!
//! Every d-tag and every `a`-tag coordinate in the protocol is produced here.
//! Builders and cross-reference sites call these functions instead of
//! formatting `kind:pubkey:id` themselves, so an entity is always referenced
//! by exactly the string it names itself with.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::kinds::{KIND_BOOK, KIND_CHAPTER, KIND_LIBRARY, KIND_LIBRARY_ENTRY};
use crate::validation::ValidationError;

/// Reverse-DNS namespace used by [`IdPolicy::Namespaced`].
pub const NAMESPACE: &str = "org.ketab-protocol";

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr, $variant:ident) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns true if `value` conforms to the pattern.
            pub fn is_valid(value: &str) -> bool {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                PATTERN
                    .get_or_init(|| Regex::new($pattern).expect("invalid regex"))
                    .is_match(value)
            }

            /// Parses a validated value from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                Self::parse_field(value, stringify!($name))
            }

            /// Parses a validated value, reporting failures against `field`.
            pub fn parse_field(
                value: impl Into<String>,
                field: &'static str,
            ) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Self::is_valid(&s) {
                    return Err(ValidationError::$variant { field, value: s });
                }
                Ok(Self(s))
            }

            /// Borrows the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    Pubkey,
    "x-only public key as 64 lowercase hex characters.",
    r"^[0-9a-f]{64}$",
    InvalidPubkey
);
newtype!(
    EventId,
    "Event identifier: sha256 of the serialized commitment, 64 lowercase hex characters.",
    r"^[0-9a-f]{64}$",
    PatternMismatch
);
newtype!(
    SignatureHex,
    "BIP-340 Schnorr signature as 128 lowercase hex characters.",
    r"^[0-9a-f]{128}$",
    PatternMismatch
);

/// Protocol-owned entity kinds that carry a d-tag identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// Library (kind 38890).
    Library,
    /// Book (kind 38891).
    Book,
    /// Library Entry (kind 38892).
    Entry,
}

impl Entity {
    /// Event kind that carries this entity.
    pub fn kind(self) -> u32 {
        match self {
            Entity::Library => KIND_LIBRARY,
            Entity::Book => KIND_BOOK,
            Entity::Entry => KIND_LIBRARY_ENTRY,
        }
    }

    /// Segment used inside a namespaced identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::Library => "library",
            Entity::Book => "book",
            Entity::Entry => "entry",
        }
    }

    /// Namespace prefix for this entity, including the trailing colon.
    pub fn namespace_prefix(self) -> String {
        format!("{}:{}:", NAMESPACE, self.as_str())
    }
}

/// Whether entity identifiers carry the `org.ketab-protocol:<entity>:` prefix.
///
/// The policy is applied to a slug both when an entity names itself (its
/// `d` tag) and when another entity points at it (an `a` coordinate), so
/// the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Identifiers are the bare slug (`alexandria`).
    #[default]
    Bare,
    /// Identifiers are namespaced (`org.ketab-protocol:library:alexandria`).
    Namespaced,
}

impl IdPolicy {
    /// Canonical identifier for `slug` under this policy.
    ///
    /// A slug that already carries the entity's namespace prefix is
    /// normalised rather than prefixed twice.
    pub fn canonical_id(self, entity: Entity, slug: &str) -> String {
        let prefix = entity.namespace_prefix();
        let bare = slug.strip_prefix(prefix.as_str()).unwrap_or(slug);
        match self {
            IdPolicy::Bare => bare.to_string(),
            IdPolicy::Namespaced => format!("{}{}", prefix, bare),
        }
    }
}

/// Canonical identifier for `slug` under `policy`.
pub fn canonical_id(entity: Entity, slug: &str, policy: IdPolicy) -> String {
    policy.canonical_id(entity, slug)
}

/// Formats a coordinate: `"{kind}:{pubkey}:{id}"`.
pub fn coordinate(kind: u32, pubkey: &str, id: &str) -> String {
    format!("{}:{}:{}", kind, pubkey, id)
}

/// Coordinate of a Library owned by `founder_pubkey`.
pub fn library_address(founder_pubkey: &str, library_slug: &str, policy: IdPolicy) -> String {
    coordinate(
        KIND_LIBRARY,
        founder_pubkey,
        &canonical_id(Entity::Library, library_slug, policy),
    )
}

/// Coordinate of a Book written by `author_pubkey`.
pub fn book_address(author_pubkey: &str, book_slug: &str, policy: IdPolicy) -> String {
    coordinate(
        KIND_BOOK,
        author_pubkey,
        &canonical_id(Entity::Book, book_slug, policy),
    )
}

/// Coordinate of a chapter. Chapters are NIP-23 events and keep their bare d-tag.
pub fn chapter_address(author_pubkey: &str, chapter_d_tag: &str) -> String {
    coordinate(KIND_CHAPTER, author_pubkey, chapter_d_tag)
}

/// Slug of a Library Entry: the library owner and book slug, colon-joined.
///
/// The book slug is reduced to its bare form first, so an entry for a book
/// has one identity however the book slug was spelled.
pub fn entry_slug(library_owner_pubkey: &str, book_slug: &str) -> String {
    format!(
        "{}:{}",
        library_owner_pubkey,
        canonical_id(Entity::Book, book_slug, IdPolicy::Bare)
    )
}

/// Parsed `kind:pubkey:identifier` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Event kind.
    pub kind: u32,
    /// Owning pubkey.
    pub pubkey: Pubkey,
    /// d-tag identifier. May itself contain colons.
    pub identifier: String,
}

impl Coordinate {
    /// Parses a coordinate string, reporting failures against `field`.
    pub fn parse_field(value: &str, field: &'static str) -> Result<Self, ValidationError> {
        let mismatch = || ValidationError::PatternMismatch {
            field,
            value: value.to_string(),
        };
        let mut parts = value.splitn(3, ':');
        let kind = parts
            .next()
            .and_then(|k| k.parse::<u32>().ok())
            .ok_or_else(mismatch)?;
        let pubkey = parts.next().filter(|p| Pubkey::is_valid(p)).ok_or_else(mismatch)?;
        let identifier = parts.next().filter(|id| !id.is_empty()).ok_or_else(mismatch)?;
        Ok(Coordinate {
            kind,
            pubkey: Pubkey::new(pubkey.to_string()),
            identifier: identifier.to_string(),
        })
    }

    /// Parses a coordinate string.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_field(value, "coordinate")
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&coordinate(self.kind, self.pubkey.as_str(), &self.identifier))
    }
}
