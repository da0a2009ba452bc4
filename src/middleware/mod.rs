//! Request checks that run in front of route handlers.
//!
//! Each check either short-circuits with an [`AppError`](crate::error::AppError)
//! or attaches what it resolved (a [`User`](crate::models::User), a
//! [`Todo`](crate::models::Todo)) to the request extensions for the next
//! layer or the handler.

pub mod plan_limit;
pub mod todo_lookup;
pub mod user_lookup;

pub use plan_limit::require_plan_capacity;
pub use todo_lookup::{is_valid_uuid, require_todo};
pub use user_lookup::{require_user_by_header, require_user_by_id, USERNAME_HEADER};
