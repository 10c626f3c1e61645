use ketab_canonical::{
    book_address, compute_event_id, library_address, tag, IdPolicy, SignedEvent, UnsignedEvent,
    ValidationError,
};
use serde_json::json;

const AUTHOR: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

#[test]
fn unsigned_event_serializes_to_golden_json() {
    let event = UnsignedEvent {
        pubkey: AUTHOR.into(),
        created_at: 1_700_000_000,
        kind: 38891,
        tags: vec![tag("d", "dune"), tag("p", AUTHOR)],
        content: "{}".into(),
    };

    let serialized = serde_json::to_value(&event).unwrap();
    let expected = json!({
        "pubkey": AUTHOR,
        "created_at": 1700000000,
        "kind": 38891,
        "tags": [["d", "dune"], ["p", AUTHOR]],
        "content": "{}"
    });

    assert_eq!(serialized, expected);
}

#[test]
fn signed_event_parses_from_wire_json() {
    let wire = json!({
        "id": "11".repeat(32),
        "pubkey": AUTHOR,
        "created_at": 1700000000,
        "kind": 38890,
        "tags": [["d", "alexandria"], ["r", "wss://relay.example"]],
        "content": "{}",
        "sig": "22".repeat(64)
    });

    let event: SignedEvent = serde_json::from_value(wire).unwrap();
    assert_eq!(event.identifier(), Some("alexandria"));
    assert_eq!(
        event.tag_values("r").collect::<Vec<_>>(),
        vec!["wss://relay.example"]
    );
}

#[test]
fn known_event_id_vector() {
    // Commitment: [0,"<AUTHOR>",1700000000,1,[],"hello"]
    let event = UnsignedEvent {
        pubkey: AUTHOR.into(),
        created_at: 1_700_000_000,
        kind: 1,
        tags: vec![],
        content: "hello".into(),
    };
    let id = compute_event_id(&event).unwrap();

    use sha2::{Digest, Sha256};
    let commitment = format!(r#"[0,"{}",1700000000,1,[],"hello"]"#, AUTHOR);
    let expected = hex::encode(Sha256::digest(commitment.as_bytes()));
    assert_eq!(id.as_str(), expected);
}

#[test]
fn namespaced_addresses_are_golden() {
    assert_eq!(
        book_address(AUTHOR, "dune", IdPolicy::Namespaced),
        format!("38891:{}:org.ketab-protocol:book:dune", AUTHOR)
    );
    assert_eq!(
        library_address(AUTHOR, "alexandria", IdPolicy::Bare),
        format!("38890:{}:alexandria", AUTHOR)
    );
}

#[test]
fn validation_messages_name_the_field() {
    let err = ValidationError::Missing {
        field: "content.name",
    };
    assert_eq!(
        err.to_string(),
        "content.name is required and must be a non-empty string"
    );
    assert_eq!(
        ValidationError::SecretKeyLength { len: 31 }.field(),
        "secret_key"
    );
}
