pub mod todo_handlers;
pub mod user_handlers;

pub use todo_handlers::{
    create_todo_handler, delete_todo_handler, list_todos_handler, mark_todo_done_handler,
    update_todo_handler,
};
pub use user_handlers::{create_user_handler, get_user_handler, upgrade_to_pro_handler};
