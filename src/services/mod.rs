pub mod todo_service;
pub mod user_service;

pub use todo_service::{TodoService, TodoServiceError, FREE_PLAN_TODO_LIMIT};
pub use user_service::{UserService, UserServiceError};
