//! Event builders.
//!
//! Every builder validates its options, derives the author pubkey through
//! the signing adapter, assembles tags with the `d` tag first, and
//! serializes content last. Builders never sign.

use chrono::Utc;
use ketab_canonical::{
    book_address, canonical_id, library_address, tag, Entity, Tag, UnsignedEvent,
};
use serde::Serialize;

use crate::config::BuildConfig;
use crate::errors::BuildError;

/// Book builder (kind 38891).
pub mod book;
/// Chapter builder (kind 30023).
pub mod chapter;
/// Library Entry builder (kind 38892).
pub mod entry;
/// Library builder (kind 38890).
pub mod library;

/// Builds events under one [`BuildConfig`].
///
/// All identifiers and coordinates a factory emits follow the same
/// [`IdPolicy`](ketab_canonical::IdPolicy), so a Library Entry built by a
/// factory points at exactly the d-tags the same factory gives Books and
/// Libraries.
#[derive(Debug, Clone, Default)]
pub struct EventFactory {
    config: BuildConfig,
}

impl EventFactory {
    /// Creates a factory for `config`.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// The factory's configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Canonical identifier for an entity slug under this factory's policy.
    pub fn canonical_id(&self, entity: Entity, slug: &str) -> String {
        canonical_id(entity, slug, self.config.id_policy)
    }

    /// Coordinate of a Library under this factory's policy.
    pub fn library_address(&self, founder_pubkey: &str, library_slug: &str) -> String {
        library_address(founder_pubkey, library_slug, self.config.id_policy)
    }

    /// Coordinate of a Book under this factory's policy.
    pub fn book_address(&self, author_pubkey: &str, book_slug: &str) -> String {
        book_address(author_pubkey, book_slug, self.config.id_policy)
    }

    fn address_tag(&self, coordinate: String) -> Tag {
        let mut t = tag("a", coordinate);
        if let Some(hint) = &self.config.relay_hint {
            t.push(hint.clone());
        }
        t
    }
}

fn resolve_created_at(created_at: Option<u64>) -> u64 {
    created_at.unwrap_or_else(|| u64::try_from(Utc::now().timestamp()).unwrap_or_default())
}

fn finish<T: Serialize>(
    kind: u32,
    pubkey: String,
    created_at: u64,
    tags: Vec<Tag>,
    content: &T,
) -> Result<UnsignedEvent, BuildError> {
    let content = serde_json::to_string(content)?;
    let event = UnsignedEvent {
        pubkey,
        created_at,
        kind,
        tags,
        content,
    };
    tracing::debug!(
        kind,
        d = event.identifier().unwrap_or_default(),
        tag_count = event.tags.len(),
        "event built"
    );
    Ok(event)
}
