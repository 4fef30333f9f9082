//! Route table wiring handlers to paths.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Builds the application router over the given state.
///
/// The paths mirror the original form-driven layout: listing and detail
/// pages under `/tasks`, with the create, update, and delete actions on
/// their own top-level paths.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(handlers::list_tasks))
        .route("/tasks/:id", get(handlers::show_task))
        .route(
            "/create_task",
            get(handlers::create_task_form).post(handlers::create_task_submit),
        )
        .route(
            "/update_task/:id",
            get(handlers::update_task_form).post(handlers::update_task_submit),
        )
        .route("/delete_task/:id", get(handlers::delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
