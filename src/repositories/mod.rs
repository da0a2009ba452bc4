pub mod todo_repository;
pub mod user_repository;

pub use todo_repository::{InMemoryTodoRepository, TodoRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("User not found")]
    UserNotFound,
    #[error("Todo not found")]
    TodoNotFound,
    #[error("User already exists")]
    AlreadyExists,
    #[error("User is already on the pro plan")]
    AlreadyPro,
    #[error("Free plan todo limit reached")]
    PlanLimitExceeded,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
