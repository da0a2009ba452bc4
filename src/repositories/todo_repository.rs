use super::{RepositoryError, RepositoryResult};
use crate::models::{Todo, User};
use crate::store::Store;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Todos live inside their owning user; every method is scoped by `user_id`
/// and a todo belonging to someone else is reported as not found.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Todo>>;
    /// Append a todo. A free-plan owner already holding `free_plan_limit`
    /// todos gets `PlanLimitExceeded` and nothing is appended.
    async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        deadline: DateTime<Utc>,
        free_plan_limit: usize,
    ) -> RepositoryResult<Todo>;
    async fn update(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> RepositoryResult<Todo>;
    async fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> RepositoryResult<Todo>;
    async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> RepositoryResult<()>;
}

pub struct InMemoryTodoRepository {
    store: Store,
}

impl InMemoryTodoRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

fn owner_mut(users: &mut [User], user_id: Uuid) -> RepositoryResult<&mut User> {
    users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or(RepositoryError::UserNotFound)
}

fn todo_mut(user: &mut User, todo_id: Uuid) -> RepositoryResult<&mut Todo> {
    user.todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or(RepositoryError::TodoNotFound)
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<Todo>> {
        let users = self.store.read().await;
        users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.todos.clone())
            .ok_or(RepositoryError::UserNotFound)
    }

    async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        deadline: DateTime<Utc>,
        free_plan_limit: usize,
    ) -> RepositoryResult<Todo> {
        let mut users = self.store.write().await;
        let user = owner_mut(&mut users, user_id)?;

        if user.todos.len() >= free_plan_limit && !user.pro {
            return Err(RepositoryError::PlanLimitExceeded);
        }

        let todo = Todo::new(title.to_string(), deadline);
        user.todos.push(todo.clone());

        Ok(todo)
    }

    async fn update(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> RepositoryResult<Todo> {
        let mut users = self.store.write().await;
        let todo = todo_mut(owner_mut(&mut users, user_id)?, todo_id)?;

        todo.title = title.to_string();
        todo.deadline = deadline;

        Ok(todo.clone())
    }

    async fn mark_done(&self, user_id: Uuid, todo_id: Uuid) -> RepositoryResult<Todo> {
        let mut users = self.store.write().await;
        let todo = todo_mut(owner_mut(&mut users, user_id)?, todo_id)?;

        todo.done = true;

        Ok(todo.clone())
    }

    async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> RepositoryResult<()> {
        let mut users = self.store.write().await;
        let user = owner_mut(&mut users, user_id)?;

        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or(RepositoryError::TodoNotFound)?;
        user.todos.remove(index);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryUserRepository, UserRepository};
    use crate::store::create_store;

    const LIMIT: usize = 10;

    #[tokio::test]
    async fn todos_are_scoped_to_their_owner() {
        let store = create_store();
        let users = InMemoryUserRepository::new(store.clone());
        let todos = InMemoryTodoRepository::new(store);

        let ana = users.create_user("Ana", "ana").await.unwrap();
        let bruno = users.create_user("Bruno", "bruno").await.unwrap();

        let todo = todos.create(ana.id, "buy milk", Utc::now(), LIMIT).await.unwrap();

        let result = todos.mark_done(bruno.id, todo.id).await;
        assert!(matches!(result, Err(RepositoryError::TodoNotFound)));

        let result = todos.delete(bruno.id, todo.id).await;
        assert!(matches!(result, Err(RepositoryError::TodoNotFound)));
        assert_eq!(todos.list_by_user(ana.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = create_store();
        let users = InMemoryUserRepository::new(store.clone());
        let todos = InMemoryTodoRepository::new(store);

        let ana = users.create_user("Ana", "ana").await.unwrap();
        let first = todos.create(ana.id, "first", Utc::now(), LIMIT).await.unwrap();
        let second = todos.create(ana.id, "second", Utc::now(), LIMIT).await.unwrap();
        let third = todos.create(ana.id, "third", Utc::now(), LIMIT).await.unwrap();

        todos.delete(ana.id, second.id).await.unwrap();

        let remaining: Vec<Uuid> = todos
            .list_by_user(ana.id)
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.id)
            .collect();
        assert_eq!(remaining, vec![first.id, third.id]);
    }

    #[tokio::test]
    async fn free_owner_is_capped_under_the_lock() {
        let store = create_store();
        let users = InMemoryUserRepository::new(store.clone());
        let todos = InMemoryTodoRepository::new(store);

        let ana = users.create_user("Ana", "ana").await.unwrap();
        for i in 0..3 {
            todos
                .create(ana.id, &format!("todo {i}"), Utc::now(), 3)
                .await
                .unwrap();
        }

        let result = todos.create(ana.id, "fourth", Utc::now(), 3).await;
        assert!(matches!(result, Err(RepositoryError::PlanLimitExceeded)));
        assert_eq!(todos.list_by_user(ana.id).await.unwrap().len(), 3);

        users.set_pro(ana.id).await.unwrap();
        todos.create(ana.id, "fourth", Utc::now(), 3).await.unwrap();
        assert_eq!(todos.list_by_user(ana.id).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn missing_owner() {
        let todos = InMemoryTodoRepository::new(create_store());
        let result = todos.list_by_user(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::UserNotFound)));
    }
}
