// ABOUTME: Integration tests for note storage operations
// ABOUTME: Tests CRUD operations, defaults, and ordering by last update

use std::sync::Arc;

use carryover_core::{Clock, Color, FixedClock};
use carryover_notes::{NoteCreateInput, NoteStorage, NoteUpdateInput};
use carryover_storage::connect_in_memory;

/// Helper to create note storage over a fresh in-memory database
async fn create_test_storage() -> (NoteStorage, Arc<FixedClock>) {
    let pool = connect_in_memory().await.unwrap();
    let clock = Arc::new(FixedClock::at_day("2024-01-03".parse().unwrap()));
    (NoteStorage::new(pool, clock.clone()), clock)
}

#[tokio::test]
async fn test_create_note() {
    let (storage, clock) = create_test_storage().await;

    let input = NoteCreateInput {
        title: Some("Groceries".to_string()),
        text: "milk, eggs".to_string(),
        color: Some(Color::Sand),
    };

    let note = storage.create_note(input).await.unwrap();

    assert_eq!(note.title, "Groceries");
    assert_eq!(note.text, "milk, eggs");
    assert_eq!(note.color, Color::Sand);
    assert_eq!(note.created_at, clock.now());
    assert_eq!(note.updated_at, clock.now());
}

#[tokio::test]
async fn test_create_note_defaults() {
    let (storage, _clock) = create_test_storage().await;

    let note = storage
        .create_note(NoteCreateInput {
            title: None,
            text: "untitled thought".to_string(),
            color: None,
        })
        .await
        .unwrap();

    assert_eq!(note.title, "");
    assert_eq!(note.color, Color::Mist);
}

#[tokio::test]
async fn test_list_notes_most_recently_updated_first() {
    let (storage, clock) = create_test_storage().await;

    let mut created = Vec::new();
    for text in ["first", "second", "third"] {
        clock.set(clock.now() + chrono::Duration::minutes(1));
        created.push(
            storage
                .create_note(NoteCreateInput {
                    text: text.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap(),
        );
    }

    let notes = storage.list_notes().await.unwrap();
    let texts: Vec<_> = notes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);

    // touching the oldest note moves it to the front
    clock.set(clock.now() + chrono::Duration::minutes(1));
    storage
        .update_note(
            &created[0].id,
            NoteUpdateInput {
                title: Some("bumped".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let notes = storage.list_notes().await.unwrap();
    assert_eq!(notes[0].id, created[0].id);
    assert_eq!(notes[0].title, "bumped");
}

#[tokio::test]
async fn test_update_note_fields() {
    let (storage, _clock) = create_test_storage().await;
    let note = storage
        .create_note(NoteCreateInput {
            title: Some("Plan".to_string()),
            text: "v1".to_string(),
            color: None,
        })
        .await
        .unwrap();

    let updated = storage
        .update_note(
            &note.id,
            NoteUpdateInput {
                title: None,
                text: Some("v2".to_string()),
                color: Some(Color::Sage),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Plan");
    assert_eq!(updated.text, "v2");
    assert_eq!(updated.color, Color::Sage);
}

#[tokio::test]
async fn test_update_and_delete_missing_note() {
    let (storage, _clock) = create_test_storage().await;

    let err = storage
        .update_note(
            "missing",
            NoteUpdateInput {
                text: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Note not found.");

    assert!(storage.delete_note("missing").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_note() {
    let (storage, _clock) = create_test_storage().await;
    let note = storage
        .create_note(NoteCreateInput {
            text: "temporary".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    storage.delete_note(&note.id).await.unwrap();

    assert!(storage.list_notes().await.unwrap().is_empty());
    assert!(storage.get_note(&note.id).await.unwrap_err().is_not_found());
}
