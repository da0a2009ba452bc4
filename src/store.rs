use crate::models::User;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-lifetime user table, shared by every repository.
///
/// Users keep insertion order; lookups scan front to back and the first match
/// wins.
pub type Store = Arc<RwLock<Vec<User>>>;

pub fn create_store() -> Store {
    Arc::new(RwLock::new(Vec::new()))
}
