use ketab_canonical::{tag, Entity, UnsignedEvent, KIND_BOOK};

use super::{finish, resolve_created_at, EventFactory};
use crate::errors::BuildError;
use crate::options::BuildBookEventOptions;
use crate::signing::derive_pubkey;
use crate::validate::validate_book_options;

impl EventFactory {
    /// Builds a Book event (kind 38891).
    ///
    /// Emits one `a` tag per chapter in reading order, then a `p` tag for the
    /// author.
    ///
    /// `content.ref_book_pubkey` is written as supplied. It must equal the
    /// pubkey of `secret_key`; [`check_event`](crate::check_event) rejects a
    /// signed Book where the two differ.
    pub fn build_book_event(
        &self,
        options: &BuildBookEventOptions,
    ) -> Result<UnsignedEvent, BuildError> {
        validate_book_options(options)?;

        let pubkey = derive_pubkey(&options.secret_key)?;
        let created_at = resolve_created_at(options.created_at);
        let content = &options.content;

        let mut tags = Vec::with_capacity(content.chapters.len() + 2);
        tags.push(tag("d", self.canonical_id(Entity::Book, &options.book_id)));
        for chapter_address in &content.chapters {
            tags.push(self.address_tag(chapter_address.clone()));
        }
        tags.push(tag("p", pubkey.as_str()));

        finish(KIND_BOOK, pubkey, created_at, tags, content)
    }
}

/// Builds a Book event with the default configuration.
pub fn build_book_event(options: &BuildBookEventOptions) -> Result<UnsignedEvent, BuildError> {
    EventFactory::default().build_book_event(options)
}
