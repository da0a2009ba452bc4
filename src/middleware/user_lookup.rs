use crate::{error::AppError, models::User, AppState};
use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the caller's username. It is trusted as-is.
pub const USERNAME_HEADER: &str = "username";

/// Resolve the caller from the `username` header. An absent or non-UTF-8
/// header is treated like an unknown username.
pub(crate) async fn resolve_user_by_header(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<User, AppError> {
    let username = headers
        .get(USERNAME_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(username) = username else {
        tracing::debug!("request without username header");
        return Err(AppError::user_not_found());
    };

    state
        .user_service
        .find_user_by_username(username)
        .await?
        .ok_or_else(|| {
            tracing::debug!(%username, "unknown username");
            AppError::user_not_found()
        })
}

/// Attach the user named by the `username` header.
pub async fn require_user_by_header(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_user_by_header(&state, &headers).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Attach the user whose id is the `{id}` path segment.
///
/// Only the canonical lowercase hyphenated spelling of an id matches.
pub async fn require_user_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Path(id) = path?;

    let user_id = Uuid::try_parse(&id)
        .ok()
        .filter(|parsed| parsed.to_string() == id);

    let user = match user_id {
        Some(user_id) => state.user_service.find_user_by_id(user_id).await?,
        None => None,
    };

    let Some(user) = user else {
        tracing::debug!(%id, "unknown user id");
        return Err(AppError::user_not_found());
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
