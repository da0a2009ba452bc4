use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(with = "timestamp")]
    pub deadline: DateTime<Utc>,
    pub done: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// Body of `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub deadline: DateTime<Utc>,
}
