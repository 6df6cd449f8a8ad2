// ABOUTME: HTTP API layer for Carryover providing REST endpoints and routing
// ABOUTME: Tasks and notes resources with CORS, tracing, and panic recovery

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod health;
pub mod middleware;
pub mod notes_handlers;
pub mod request;
pub mod state;
pub mod tasks_handlers;

pub use error::{ApiResult, AppError};
pub use state::AppState;

use error::method_not_allowed;

/// Routes for the tasks resource. The id may come from the path, the query, or the body.
pub fn create_tasks_router() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(tasks_handlers::list_tasks)
                .post(tasks_handlers::create_task)
                .patch(tasks_handlers::update_task)
                .delete(tasks_handlers::delete_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{id}",
            patch(tasks_handlers::update_task_by_path)
                .delete(tasks_handlers::delete_task_by_path)
                .fallback(method_not_allowed),
        )
}

/// Routes for the notes resource
pub fn create_notes_router() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(notes_handlers::list_notes)
                .post(notes_handlers::create_note)
                .patch(notes_handlers::update_note)
                .delete(notes_handlers::delete_note)
                .fallback(method_not_allowed),
        )
        .route(
            "/notes/{id}",
            patch(notes_handlers::update_note_by_path)
                .delete(notes_handlers::delete_note_by_path)
                .fallback(method_not_allowed),
        )
}

/// The complete application with all layers applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_tasks_router())
        .merge(create_notes_router())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::create_panic_handler())
        .layer(middleware::cors_layer())
        .with_state(state)
}
