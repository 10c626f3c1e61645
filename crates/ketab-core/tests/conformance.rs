use ketab_canonical::{chapter_address, SignedEvent, ValidationError, KIND_BOOK, KIND_LIBRARY};
use ketab_core::{
    build_book_event, build_library_entry_event, check_event, derive_pubkey, sign_event,
    verify_event, BookContent, BuildBookEventOptions, BuildLibraryEntryEventOptions,
    ConformanceError, LibraryEntryContent,
};

const SECRET: [u8; 32] = [11u8; 32];

fn make_pubkey(byte: u8) -> String {
    hex::encode([byte; 32])
}

fn signed_book() -> SignedEvent {
    let author = derive_pubkey(&SECRET).unwrap();
    let options = BuildBookEventOptions {
        secret_key: SECRET.to_vec(),
        book_id: "dune".into(),
        content: BookContent {
            title: "Dune".into(),
            subtitle: Some("Book One".into()),
            description: "Desert planet".into(),
            dedication: None,
            author: "Frank".into(),
            cover_image_url: Some("https://img.example/dune.png".into()),
            published_at: 1_700_000_000,
            chapter_count: 2,
            chapters: vec![
                chapter_address(&author, "ch-1"),
                chapter_address(&author, "ch-2"),
            ],
            ref_book_pubkey: author.clone(),
            ref_book_id: "dune".into(),
            ref_library_pubkey: None,
            ref_library_id: None,
            ref_block_id: "block-1".into(),
        },
        created_at: Some(1_700_000_000),
    };
    let event = build_book_event(&options).unwrap();
    sign_event(&event, &SECRET).unwrap()
}

fn signed_entry() -> SignedEvent {
    let owner = derive_pubkey(&SECRET).unwrap();
    let author = make_pubkey(0xab);
    let options = BuildLibraryEntryEventOptions {
        secret_key: SECRET.to_vec(),
        library_owner_pubkey: owner.clone(),
        book_slug: "dune".into(),
        book_author_pubkey: author.clone(),
        content: LibraryEntryContent {
            notes: Some("re-read".into()),
            rating: Some(5),
            tags: Some(vec!["scifi".into()]),
            added_at: 1_700_000_000,
            read_status: Some("finished".into()),
            ref_library_owner_pubkey: owner,
            ref_library_id: "alexandria".into(),
            ref_book_coordinate: format!("38891:{}:dune", author),
            ref_book_pubkey: author,
            ref_book_id: "dune".into(),
            ref_block_id: "block-1".into(),
        },
        created_at: Some(1_700_000_000),
    };
    let event = build_library_entry_event(&options).unwrap();
    sign_event(&event, &SECRET).unwrap()
}

#[test]
fn built_events_conform() {
    let book = signed_book();
    assert!(verify_event(&book));
    check_event(&book).unwrap();

    let entry = signed_entry();
    assert!(verify_event(&entry));
    check_event(&entry).unwrap();
}

#[test]
fn unknown_kind_is_rejected() {
    let mut event = signed_book();
    event.kind = 1;
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::UnknownKind(1))
    ));
}

#[test]
fn first_tag_must_be_identifier() {
    let mut event = signed_book();
    event.tags.rotate_left(1);
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::MissingIdentifier)
    ));

    let mut event = signed_book();
    event.tags[0][1] = "  ".into();
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::MissingIdentifier)
    ));

    let mut event = signed_book();
    event.tags.clear();
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::MissingIdentifier)
    ));
}

#[test]
fn malformed_id_is_a_field_error() {
    let mut event = signed_book();
    event.id = event.id.to_uppercase();
    match check_event(&event) {
        Err(ConformanceError::Field(err)) => assert_eq!(err.field(), "id"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn book_must_be_published_by_its_author() {
    let mut event = signed_book();
    let mut content: BookContent = serde_json::from_str(&event.content).unwrap();
    content.ref_book_pubkey = make_pubkey(0x01);
    event.content = serde_json::to_string(&content).unwrap();
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::AuthorMismatch)
    ));
}

#[test]
fn book_without_p_tag_is_rejected() {
    let mut event = signed_book();
    event.tags.retain(|t| t[0] != "p");
    match check_event(&event) {
        Err(ConformanceError::TagCount {
            tag,
            expected,
            found,
        }) => {
            assert_eq!(tag, "p");
            assert_eq!(expected, 1);
            assert_eq!(found, 0);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn book_content_is_revalidated() {
    let mut event = signed_book();
    let mut content: BookContent = serde_json::from_str(&event.content).unwrap();
    content.chapter_count = 7;
    event.content = serde_json::to_string(&content).unwrap();
    match check_event(&event) {
        Err(ConformanceError::Field(err)) => {
            assert!(matches!(err, ValidationError::CountMismatch { .. }))
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn entry_needs_library_coordinate() {
    let mut event = signed_entry();
    let library_prefix = format!("{}:", KIND_LIBRARY);
    event
        .tags
        .retain(|t| !(t[0] == "a" && t[1].starts_with(&library_prefix)));
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::MissingCoordinate { kind }) if kind == KIND_LIBRARY
    ));
}

#[test]
fn entry_needs_book_coordinate() {
    let mut event = signed_entry();
    let book_prefix = format!("{}:", KIND_BOOK);
    event
        .tags
        .retain(|t| !(t[0] == "a" && t[1].starts_with(&book_prefix)));
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::MissingCoordinate { kind }) if kind == KIND_BOOK
    ));
}

#[test]
fn content_must_parse() {
    let mut event = signed_entry();
    event.content = "{not json".into();
    match check_event(&event) {
        Err(ConformanceError::InvalidContent { kind, .. }) => assert_eq!(kind, event.kind),
        other => panic!("unexpected result {other:?}"),
    }

    let mut event = signed_entry();
    event.content = "{}".into();
    assert!(matches!(
        check_event(&event),
        Err(ConformanceError::InvalidContent { .. })
    ));
}

#[test]
fn tampering_breaks_signature_but_not_shape() {
    let mut event = signed_book();
    event.created_at += 1;
    assert!(!verify_event(&event));
    check_event(&event).unwrap();
}
