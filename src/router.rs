use crate::{handlers, middleware as checks, AppState};
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the HTTP surface over `state`.
///
/// Checks are attached per route with `route_layer`; the last layer added runs
/// first, so `user_by_header` always precedes `plan_capacity` and `todo`.
pub fn build_router(state: AppState) -> Router {
    let user_by_id = || from_fn_with_state(state.clone(), checks::require_user_by_id);
    let user_by_header = || from_fn_with_state(state.clone(), checks::require_user_by_header);
    let plan_capacity = || from_fn_with_state(state.clone(), checks::require_plan_capacity);
    let todo = || from_fn_with_state(state.clone(), checks::require_todo);

    let user_routes = Router::new()
        .route("/users", post(handlers::create_user_handler))
        .route(
            "/users/{id}",
            get(handlers::get_user_handler).route_layer(user_by_id()),
        )
        .route(
            "/users/{id}/pro",
            patch(handlers::upgrade_to_pro_handler).route_layer(user_by_id()),
        );

    let todo_routes = Router::new()
        .route(
            "/todos",
            get(handlers::list_todos_handler).route_layer(user_by_header()),
        )
        .route(
            "/todos",
            post(handlers::create_todo_handler)
                .route_layer(plan_capacity())
                .route_layer(user_by_header()),
        )
        .route(
            "/todos/{id}",
            put(handlers::update_todo_handler).route_layer(todo()),
        )
        .route(
            "/todos/{id}",
            delete(handlers::delete_todo_handler)
                .route_layer(todo())
                .route_layer(user_by_header()),
        )
        .route(
            "/todos/{id}/done",
            patch(handlers::mark_todo_done_handler).route_layer(todo()),
        );

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(user_routes)
        .merge(todo_routes)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
