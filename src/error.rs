use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::repositories::RepositoryError;
use crate::services::{TodoServiceError, UserServiceError};

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Terminal request failure, rendered as `{"error": message}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound("Not found".to_string())
    }

    pub fn bad_request() -> Self {
        AppError::BadRequest("Bad request".to_string())
    }

    pub fn forbidden() -> Self {
        AppError::Forbidden("Forbidden".to_string())
    }

    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameter: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UserNotFound => AppError::user_not_found(),
            RepositoryError::TodoNotFound => AppError::NotFound("Todo not found".to_string()),
            RepositoryError::AlreadyExists => {
                AppError::BadRequest("Username already exists".to_string())
            }
            RepositoryError::AlreadyPro => {
                AppError::BadRequest("Pro plan is already activated.".to_string())
            }
            RepositoryError::PlanLimitExceeded => {
                AppError::Forbidden("plan limit exceeded".to_string())
            }
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::UsernameTaken | UserServiceError::AlreadyPro => {
                AppError::BadRequest(err.to_string())
            }
            UserServiceError::UserNotFound => AppError::user_not_found(),
            UserServiceError::RepositoryError(e) => e.into(),
        }
    }
}

impl From<TodoServiceError> for AppError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::PlanLimitExceeded => AppError::Forbidden(err.to_string()),
            TodoServiceError::UserNotFound | TodoServiceError::TodoNotFound => {
                AppError::NotFound(err.to_string())
            }
            TodoServiceError::RepositoryError(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn default_messages() {
        assert_eq!(
            render(AppError::not_found()).await,
            (StatusCode::NOT_FOUND, json!({ "error": "Not found" }))
        );
        assert_eq!(
            render(AppError::bad_request()).await,
            (StatusCode::BAD_REQUEST, json!({ "error": "Bad request" }))
        );
        assert_eq!(
            render(AppError::forbidden()).await,
            (StatusCode::FORBIDDEN, json!({ "error": "Forbidden" }))
        );
    }

    #[tokio::test]
    async fn custom_message_is_kept() {
        let (status, body) = render(AppError::BadRequest("uuid is not valid".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "uuid is not valid" }));
    }

    #[test]
    fn service_errors_map_to_http_kinds() {
        assert_eq!(
            AppError::from(TodoServiceError::PlanLimitExceeded),
            AppError::Forbidden("plan limit exceeded".to_string())
        );
        assert_eq!(
            AppError::from(TodoServiceError::TodoNotFound),
            AppError::NotFound("Todo not found".to_string())
        );
        assert_eq!(
            AppError::from(UserServiceError::AlreadyPro),
            AppError::BadRequest("Pro plan is already activated.".to_string())
        );
        assert_eq!(
            AppError::from(UserServiceError::UsernameTaken),
            AppError::BadRequest("Username already exists".to_string())
        );
    }
}
