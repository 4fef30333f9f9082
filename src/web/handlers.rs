//! Request handlers for the task routes.
//!
//! Handlers keep the original form-driven flow: list and detail pages render
//! HTML, the create and update routes serve their forms on `GET` and accept
//! submissions on `POST`, and delete redirects back to the listing. Missing
//! tasks surface as a JSON 404 before any form content is inspected.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum extractors are received by value"
)]

use axum::extract::{Form, FromRequest, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use super::error::WebError;
use super::state::AppState;
use crate::task::domain::{TaskDraft, TaskId};

/// Form payload shared by the create and update views.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskForm {
    /// Submitted title.
    pub title: String,
    /// Submitted description.
    pub description: String,
    /// Submitted due date in `YYYY-MM-DD` format.
    pub due_date: String,
}

/// Renders the listing page for every stored task.
///
/// # Errors
///
/// Returns [`WebError`] when the store or the template fails.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let tasks = state.repository().list().await?;
    state.views().task_list(&tasks).map(Html)
}

/// Renders the detail page for one task.
///
/// # Errors
///
/// Returns [`WebError::TaskNotFound`] when no task has the identifier.
pub async fn show_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let task = state
        .repository()
        .find(TaskId::new(id))
        .await?
        .ok_or(WebError::TaskNotFound)?;
    state.views().task_detail(&task).map(Html)
}

/// Renders the empty task creation form.
///
/// # Errors
///
/// Returns [`WebError::TemplateRender`] when the template fails.
#[expect(
    clippy::unused_async,
    reason = "route handlers share an async signature"
)]
pub async fn create_task_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    state.views().create_task().map(Html)
}

/// Stores a submitted task and renders its detail page.
///
/// # Errors
///
/// Returns [`WebError::MalformedForm`] or [`WebError::InvalidInput`] when
/// the submission cannot be read or parsed.
pub async fn create_task_submit(
    State(state): State<AppState>,
    request: Request,
) -> Result<Html<String>, WebError> {
    let form = parse_form(request).await?;
    let draft = TaskDraft::parse(form.title, form.description, &form.due_date)?;
    let created = state.repository().create(&draft).await?;
    state.views().task_detail(&created).map(Html)
}

/// Renders the update form pre-filled with the task's current content.
///
/// # Errors
///
/// Returns [`WebError::TaskNotFound`] when no task has the identifier.
pub async fn update_task_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, WebError> {
    let task = state
        .repository()
        .find(TaskId::new(id))
        .await?
        .ok_or(WebError::TaskNotFound)?;
    state.views().update_task(&task).map(Html)
}

/// Replaces a task's content and renders its detail page.
///
/// The existence check runs before the form is read, so a missing task is
/// reported even when the submission itself is malformed.
///
/// # Errors
///
/// Returns [`WebError::TaskNotFound`] when no task has the identifier, or a
/// client error when the submission cannot be parsed.
pub async fn update_task_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    request: Request,
) -> Result<Html<String>, WebError> {
    let task_id = TaskId::new(id);
    state
        .repository()
        .find(task_id)
        .await?
        .ok_or(WebError::TaskNotFound)?;

    let form = parse_form(request).await?;
    let draft = TaskDraft::parse(form.title, form.description, &form.due_date)?;
    let updated = state.repository().update(task_id, &draft).await?;
    state.views().task_detail(&updated).map(Html)
}

/// Deletes a task and redirects back to the listing page.
///
/// # Errors
///
/// Returns [`WebError`] mapping to a 404 when no task has the identifier.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    state.repository().delete(TaskId::new(id)).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, "/tasks")]).into_response())
}

/// Reads the shared task form from a request body.
async fn parse_form(request: Request) -> Result<TaskForm, WebError> {
    let Form(form) = Form::<TaskForm>::from_request(request, &())
        .await
        .map_err(|rejection| WebError::MalformedForm(rejection.body_text()))?;
    Ok(form)
}
