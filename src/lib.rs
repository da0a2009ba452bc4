pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod router;
pub mod services;
pub mod store;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::user_service::UserService>,
    pub todo_service: Arc<services::todo_service::TodoService>,
}

impl AppState {
    /// Wire repositories and services over a single shared store.
    pub fn new(store: store::Store) -> Self {
        let user_repository = Arc::new(repositories::InMemoryUserRepository::new(store.clone()));
        let todo_repository = Arc::new(repositories::InMemoryTodoRepository::new(store));

        Self {
            user_service: Arc::new(services::UserService::new(user_repository)),
            todo_service: Arc::new(services::TodoService::new(todo_repository)),
        }
    }
}
