use super::{RepositoryError, RepositoryResult};
use crate::models::User;
use crate::store::Store;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, name: &str, username: &str) -> RepositoryResult<User>;
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    /// Flip `pro` on; fails with `AlreadyPro` if it is already set.
    async fn set_pro(&self, id: Uuid) -> RepositoryResult<User>;
}

pub struct InMemoryUserRepository {
    store: Store,
}

impl InMemoryUserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, name: &str, username: &str) -> RepositoryResult<User> {
        let mut users = self.store.write().await;

        if users.iter().any(|user| user.username == username) {
            return Err(RepositoryError::AlreadyExists);
        }

        let user = User::new(name.to_string(), username.to_string());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let users = self.store.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let users = self.store.read().await;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn set_pro(&self, id: Uuid) -> RepositoryResult<User> {
        let mut users = self.store.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(RepositoryError::UserNotFound)?;

        if user.pro {
            return Err(RepositoryError::AlreadyPro);
        }
        user.pro = true;

        Ok(user.clone())
    }
}
