pub mod timestamp;
pub mod todo;
pub mod user;

pub use todo::{Todo, TodoRequest};
pub use user::{CreateUserRequest, User};
