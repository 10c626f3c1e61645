use ketab_canonical::{tag, Entity, UnsignedEvent, KIND_LIBRARY};

use super::{finish, resolve_created_at, EventFactory};
use crate::errors::BuildError;
use crate::options::BuildLibraryEventOptions;
use crate::signing::derive_pubkey;
use crate::validate::validate_library_options;

impl EventFactory {
    /// Builds a Library event (kind 38890).
    ///
    /// Tags: `d`, `p` founder, `p` clock, then `r` relay and `u` website when
    /// those URLs are present.
    pub fn build_library_event(
        &self,
        options: &BuildLibraryEventOptions,
    ) -> Result<UnsignedEvent, BuildError> {
        validate_library_options(options)?;

        let pubkey = derive_pubkey(&options.secret_key)?;
        let created_at = resolve_created_at(options.created_at);
        let content = &options.content;

        let mut tags = vec![
            tag("d", self.canonical_id(Entity::Library, &options.library_id)),
            tag("p", content.founder_pubkey.as_str()),
            tag("p", content.ref_clock_pubkey.as_str()),
        ];
        if let Some(relay_url) = &content.relay_url {
            tags.push(tag("r", relay_url.as_str()));
        }
        if let Some(website_url) = &content.website_url {
            tags.push(tag("u", website_url.as_str()));
        }

        finish(KIND_LIBRARY, pubkey, created_at, tags, content)
    }
}

/// Builds a Library event with the default configuration.
pub fn build_library_event(
    options: &BuildLibraryEventOptions,
) -> Result<UnsignedEvent, BuildError> {
    EventFactory::default().build_library_event(options)
}
