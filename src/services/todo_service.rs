use crate::models::{Todo, TodoRequest, User};
use crate::repositories::todo_repository::TodoRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

/// Maximum number of todos a user on the free plan may hold.
pub const FREE_PLAN_TODO_LIMIT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    #[error("plan limit exceeded")]
    PlanLimitExceeded,
    #[error("User not found")]
    UserNotFound,
    #[error("Todo not found")]
    TodoNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(RepositoryError),
}

impl From<RepositoryError> for TodoServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::UserNotFound => TodoServiceError::UserNotFound,
            RepositoryError::TodoNotFound => TodoServiceError::TodoNotFound,
            RepositoryError::PlanLimitExceeded => TodoServiceError::PlanLimitExceeded,
            other => TodoServiceError::RepositoryError(other),
        }
    }
}

pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Free users are capped at [`FREE_PLAN_TODO_LIMIT`] todos; pro users are
    /// not capped.
    pub fn check_plan_limit(&self, user: &User) -> Result<(), TodoServiceError> {
        if user.todos.len() >= FREE_PLAN_TODO_LIMIT && !user.pro {
            return Err(TodoServiceError::PlanLimitExceeded);
        }
        Ok(())
    }

    pub async fn list_todos(&self, user_id: Uuid) -> Result<Vec<Todo>, TodoServiceError> {
        Ok(self.repository.list_by_user(user_id).await?)
    }

    pub async fn create_todo(
        &self,
        user_id: Uuid,
        request: TodoRequest,
    ) -> Result<Todo, TodoServiceError> {
        let todo = self
            .repository
            .create(
                user_id,
                &request.title,
                request.deadline,
                FREE_PLAN_TODO_LIMIT,
            )
            .await?;

        tracing::info!(%user_id, todo_id = %todo.id, "todo created");
        Ok(todo)
    }

    pub async fn update_todo(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        request: TodoRequest,
    ) -> Result<Todo, TodoServiceError> {
        let todo = self
            .repository
            .update(user_id, todo_id, &request.title, request.deadline)
            .await?;

        tracing::debug!(%user_id, %todo_id, "todo updated");
        Ok(todo)
    }

    pub async fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> Result<Todo, TodoServiceError> {
        let todo = self.repository.mark_done(user_id, todo_id).await?;

        tracing::debug!(%user_id, %todo_id, "todo marked done");
        Ok(todo)
    }

    pub async fn delete_todo(&self, user_id: Uuid, todo_id: Uuid) -> Result<(), TodoServiceError> {
        self.repository.delete(user_id, todo_id).await?;

        tracing::info!(%user_id, %todo_id, "todo deleted");
        Ok(())
    }
}
