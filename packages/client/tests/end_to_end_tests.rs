// ABOUTME: Boards driven against the real router on a loopback listener
// ABOUTME: Walks a task through rollover, completion, history, and re-opening across days

use std::sync::Arc;

use carryover_api::{create_router, AppState};
use carryover_client::{ApiClient, NoteBoard, NoteDraft, TaskBoard, TaskDraft};
use carryover_core::FixedClock;
use carryover_notes::NoteUpdateInput;
use carryover_storage::connect_in_memory;
use carryover_tasks::TaskView;
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

async fn spawn_server(clock: Arc<FixedClock>) -> String {
    let pool = connect_in_memory().await.unwrap();
    let app = create_router(AppState::new(pool, clock));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_task_carries_over_then_completes_then_reopens() {
    let clock = Arc::new(FixedClock::at_day("2024-01-01".parse().unwrap()));
    let base_url = spawn_server(clock.clone()).await;
    let mut board = TaskBoard::new(ApiClient::new(&base_url).unwrap(), clock.clone());

    let created = board.add_task(TaskDraft::new("buy milk")).await.unwrap();
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].id, created.id);

    // Two days later the task is carried into today.
    clock.set_day("2024-01-03".parse().unwrap());
    board.refresh(TaskView::Today).await.unwrap();
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].day.to_string(), "2024-01-03");
    assert!(!board.tasks()[0].completed);

    let done = board.toggle(&created.id).await.unwrap();
    assert!(done.completed);
    assert_eq!(done.day.to_string(), "2024-01-03");

    clock.set_day("2024-01-05".parse().unwrap());
    board.refresh(TaskView::History).await.unwrap();
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].day.to_string(), "2024-01-03");

    let reopened = board.toggle(&created.id).await.unwrap();
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_at, None);
    assert_eq!(reopened.day.to_string(), "2024-01-05");

    board.refresh(TaskView::Today).await.unwrap();
    assert_eq!(board.tasks().len(), 1);
    board.refresh(TaskView::History).await.unwrap();
    assert!(board.tasks().is_empty());
}

#[tokio::test]
async fn test_server_rejection_surfaces_through_the_board() {
    let clock = Arc::new(FixedClock::at_day("2024-01-03".parse().unwrap()));
    let base_url = spawn_server(clock.clone()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let mut board = TaskBoard::new(client.clone(), clock.clone());
    let task = board.add_task(TaskDraft::new("doomed")).await.unwrap();

    client.delete_task(&task.id).await.unwrap();
    let err = board.delete(&task.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(board.get(&task.id).is_some());
}

#[tokio::test]
async fn test_note_round_trip() {
    let clock = Arc::new(FixedClock::at_day("2024-01-03".parse().unwrap()));
    let base_url = spawn_server(clock.clone()).await;
    let mut board = NoteBoard::new(ApiClient::new(&base_url).unwrap(), clock.clone());

    let note = board
        .add_note(NoteDraft::new("remember the milk").with_title("Shopping"))
        .await
        .unwrap();

    let edited = board
        .edit(
            &note.id,
            NoteUpdateInput {
                text: Some("remember the eggs".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.title, "Shopping");
    assert_eq!(board.notes()[0].text, "remember the eggs");

    board.refresh().await.unwrap();
    assert_eq!(board.notes().len(), 1);

    board.delete(&note.id).await.unwrap();
    assert!(board.notes().is_empty());
}
