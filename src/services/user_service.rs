use crate::models::{CreateUserRequest, User};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("User not found")]
    UserNotFound,
    #[error("Pro plan is already activated.")]
    AlreadyPro,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, UserServiceError> {
        match self
            .repository
            .create_user(&request.name, &request.username)
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "user created");
                Ok(user)
            }
            Err(RepositoryError::AlreadyExists) => Err(UserServiceError::UsernameTaken),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserServiceError> {
        Ok(self.repository.find_by_username(username).await?)
    }

    /// Switch a free user to the pro plan. A user that is already pro is
    /// rejected rather than left untouched; the repository re-checks the flag
    /// under its write lock, so of two concurrent upgrades only one succeeds.
    pub async fn upgrade_to_pro(&self, user: &User) -> Result<User, UserServiceError> {
        if user.pro {
            return Err(UserServiceError::AlreadyPro);
        }

        match self.repository.set_pro(user.id).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "user upgraded to pro plan");
                Ok(user)
            }
            Err(RepositoryError::UserNotFound) => Err(UserServiceError::UserNotFound),
            Err(RepositoryError::AlreadyPro) => Err(UserServiceError::AlreadyPro),
            Err(e) => Err(UserServiceError::RepositoryError(e)),
        }
    }
}
