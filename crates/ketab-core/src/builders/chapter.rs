use ketab_canonical::{tag, UnsignedEvent, KIND_CHAPTER};

use super::{finish, resolve_created_at, EventFactory};
use crate::errors::BuildError;
use crate::options::BuildChapterEventOptions;
use crate::signing::derive_pubkey;
use crate::validate::validate_chapter_options;

impl EventFactory {
    /// Builds a Chapter event (kind 30023).
    ///
    /// The d-tag is the bare chapter id. When `book_slug` is set, an `a` tag
    /// points at the author's Book.
    pub fn build_chapter_event(
        &self,
        options: &BuildChapterEventOptions,
    ) -> Result<UnsignedEvent, BuildError> {
        validate_chapter_options(options)?;

        let pubkey = derive_pubkey(&options.secret_key)?;
        let created_at = resolve_created_at(options.created_at);

        let mut tags = vec![tag("d", options.chapter_id.as_str())];
        if let Some(book_slug) = &options.book_slug {
            tags.push(self.address_tag(self.book_address(&pubkey, book_slug)));
        }

        finish(KIND_CHAPTER, pubkey, created_at, tags, &options.content)
    }
}

/// Builds a Chapter event with the default configuration.
pub fn build_chapter_event(
    options: &BuildChapterEventOptions,
) -> Result<UnsignedEvent, BuildError> {
    EventFactory::default().build_chapter_event(options)
}
