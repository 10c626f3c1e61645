use ketab_canonical::{entry_slug, tag, Entity, UnsignedEvent, KIND_LIBRARY_ENTRY};

use super::{finish, resolve_created_at, EventFactory};
use crate::errors::BuildError;
use crate::options::BuildLibraryEntryEventOptions;
use crate::signing::derive_pubkey;
use crate::validate::validate_entry_options;

impl EventFactory {
    /// Builds a Library Entry event (kind 38892).
    ///
    /// Tags, in order: `d` entry id, `a` book coordinate, `a` library
    /// coordinate, `p` library owner, `p` book author. The entry id is
    /// `<library_owner_pubkey>:<book_slug>` under the factory's policy, with
    /// the book slug in its bare form as in the book coordinate.
    ///
    /// `content.ref_book_coordinate` is written as supplied; keeping it equal
    /// to the derived book coordinate is the caller's job.
    pub fn build_library_entry_event(
        &self,
        options: &BuildLibraryEntryEventOptions,
    ) -> Result<UnsignedEvent, BuildError> {
        validate_entry_options(options)?;

        let pubkey = derive_pubkey(&options.secret_key)?;
        let created_at = resolve_created_at(options.created_at);
        let content = &options.content;

        let entry_id = self.canonical_id(
            Entity::Entry,
            &entry_slug(&options.library_owner_pubkey, &options.book_slug),
        );
        let book_coordinate = self.book_address(&options.book_author_pubkey, &options.book_slug);
        let library_coordinate =
            self.library_address(&options.library_owner_pubkey, &content.ref_library_id);

        let tags = vec![
            tag("d", entry_id),
            self.address_tag(book_coordinate),
            self.address_tag(library_coordinate),
            tag("p", options.library_owner_pubkey.as_str()),
            tag("p", options.book_author_pubkey.as_str()),
        ];

        finish(KIND_LIBRARY_ENTRY, pubkey, created_at, tags, content)
    }
}

/// Builds a Library Entry event with the default configuration.
pub fn build_library_entry_event(
    options: &BuildLibraryEntryEventOptions,
) -> Result<UnsignedEvent, BuildError> {
    EventFactory::default().build_library_entry_event(options)
}
