use serde::{Deserialize, Serialize};

use crate::identifiers::coordinate;

/// A tag: tag name followed by its values, e.g. `["a", "30023:<pubkey>:ch-1"]`.
pub type Tag = Vec<String>;

/// Builds a two-element tag.
pub fn tag(name: &str, value: impl Into<String>) -> Tag {
    vec![name.to_string(), value.into()]
}

/// Values of every tag named `name`, in order.
pub fn tag_values<'a>(tags: &'a [Tag], name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    tags.iter()
        .filter(move |t| t.len() >= 2 && t[0] == name)
        .map(|t| t[1].as_str())
}

/// Record produced by the builders, ready to be signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedEvent {
    /// Author pubkey (64 lowercase hex).
    pub pubkey: String,
    /// Unix seconds.
    pub created_at: u64,
    /// Event kind.
    pub kind: u32,
    /// Ordered tags; the first is always the `d` tag for protocol events.
    pub tags: Vec<Tag>,
    /// JSON-encoded content struct.
    pub content: String,
}

impl UnsignedEvent {
    /// Value of the `d` tag.
    pub fn identifier(&self) -> Option<&str> {
        tag_values(&self.tags, "d").next()
    }

    /// Coordinate this event would be referenced by.
    pub fn coordinate(&self) -> Option<String> {
        self.identifier()
            .map(|id| coordinate(self.kind, &self.pubkey, id))
    }

    /// Values of every tag named `name`.
    pub fn tag_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        tag_values(&self.tags, name)
    }
}

/// Signed record as exchanged on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEvent {
    /// sha256 of the serialized commitment (64 lowercase hex).
    pub id: String,
    /// Author pubkey (64 lowercase hex).
    pub pubkey: String,
    /// Unix seconds.
    pub created_at: u64,
    /// Event kind.
    pub kind: u32,
    /// Ordered tags.
    pub tags: Vec<Tag>,
    /// JSON-encoded content struct.
    pub content: String,
    /// Schnorr signature over `id` (128 lowercase hex).
    pub sig: String,
}

impl SignedEvent {
    /// Attaches an id and signature to an unsigned record.
    pub fn from_parts(event: UnsignedEvent, id: String, sig: String) -> Self {
        Self {
            id,
            pubkey: event.pubkey,
            created_at: event.created_at,
            kind: event.kind,
            tags: event.tags,
            content: event.content,
            sig,
        }
    }

    /// The signed fields without `id` and `sig`.
    pub fn unsigned(&self) -> UnsignedEvent {
        UnsignedEvent {
            pubkey: self.pubkey.clone(),
            created_at: self.created_at,
            kind: self.kind,
            tags: self.tags.clone(),
            content: self.content.clone(),
        }
    }

    /// Value of the `d` tag.
    pub fn identifier(&self) -> Option<&str> {
        tag_values(&self.tags, "d").next()
    }

    /// Values of every tag named `name`.
    pub fn tag_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        tag_values(&self.tags, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event() -> UnsignedEvent {
        UnsignedEvent {
            pubkey: "ab".repeat(32),
            created_at: 1_700_000_000,
            kind: 38891,
            tags: vec![
                tag("d", "dune"),
                tag("a", "30023:x:1"),
                vec!["e".to_string()],
                tag("a", "30023:x:2"),
            ],
            content: "{}".to_string(),
        }
    }

    #[test]
    fn tag_values_skip_short_tags_and_keep_order() {
        let event = make_event();
        let values: Vec<_> = event.tag_values("a").collect();
        assert_eq!(values, vec!["30023:x:1", "30023:x:2"]);
        assert_eq!(event.tag_values("e").count(), 0);
    }

    #[test]
    fn coordinate_uses_d_tag() {
        let event = make_event();
        assert_eq!(
            event.coordinate().unwrap(),
            format!("38891:{}:dune", "ab".repeat(32))
        );
    }

    #[test]
    fn signed_event_field_order_matches_wire_shape() {
        let signed = SignedEvent::from_parts(make_event(), "00".repeat(32), "11".repeat(64));
        let json = serde_json::to_string(&signed).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let pubkey_pos = json.find("\"pubkey\"").unwrap();
        let sig_pos = json.find("\"sig\"").unwrap();
        assert!(id_pos < pubkey_pos && pubkey_pos < sig_pos);
        assert_eq!(signed.unsigned(), make_event());
    }
}
