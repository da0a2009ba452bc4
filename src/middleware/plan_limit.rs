use crate::{error::AppError, models::User, AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Refuse todo creation once a free-plan user is at the quota.
///
/// Must sit behind [`require_user_by_header`](super::require_user_by_header);
/// it reads the attached user instead of looking it up again.
pub async fn require_plan_capacity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<User>()
        .ok_or_else(AppError::user_not_found)?;

    if let Err(e) = state.todo_service.check_plan_limit(user) {
        tracing::debug!(user_id = %user.id, todos = user.todos.len(), "plan limit reached");
        return Err(e.into());
    }

    Ok(next.run(request).await)
}
