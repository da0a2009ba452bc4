use crate::error::AppError;
use crate::models::{Todo, TodoRequest, User};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};

/// GET /todos - List the caller's todos
pub async fn list_todos_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todo_service.list_todos(user.id).await?;

    Ok(Json(todos))
}

/// POST /todos - Create a todo for the caller
///
/// Quota enforcement happens in the middleware in front of this handler.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    let todo = state.todo_service.create_todo(user.id, request).await?;

    Ok((StatusCode::CREATED, Json(todo)).into_response())
}

/// PUT /todos/{id} - Replace title and deadline
pub async fn update_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Extension(todo): Extension<Todo>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(request) = payload?;

    let todo = state
        .todo_service
        .update_todo(user.id, todo.id, request)
        .await?;

    Ok(Json(todo))
}

/// PATCH /todos/{id}/done - Mark a todo as done
///
/// Marking an already finished todo succeeds again.
pub async fn mark_todo_done_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Extension(todo): Extension<Todo>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.todo_service.mark_done(user.id, todo.id).await?;

    Ok(Json(todo))
}

/// DELETE /todos/{id} - Remove a todo
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Extension(todo): Extension<Todo>,
) -> Result<StatusCode, AppError> {
    state.todo_service.delete_todo(user.id, todo.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
