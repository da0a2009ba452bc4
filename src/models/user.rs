use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Todo;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub pro: bool,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }

    pub fn find_todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id.to_string() == id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
}
