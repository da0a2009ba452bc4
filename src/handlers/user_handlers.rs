use crate::error::AppError;
use crate::models::{CreateUserRequest, User};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};

/// POST /users - Register a user
///
/// ## Errors
/// - 400 Bad Request: username already taken or malformed body
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    let user = state.user_service.create_user(request).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// GET /users/{id} - Fetch a user with their todos
pub async fn get_user_handler(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}

/// PATCH /users/{id}/pro - Move a user to the pro plan
///
/// ## Errors
/// - 400 Bad Request: user is already pro
pub async fn upgrade_to_pro_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.upgrade_to_pro(&user).await?;

    Ok(Json(user))
}
