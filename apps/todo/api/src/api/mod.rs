use axum::Router;
use axum::routing::get;
use domain_todo::{PgTodoRepository, TodoService, handlers};

pub mod health;

/// The todo routes, backed by Postgres, with state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgTodoRepository::new(state.db.clone());
    handlers::router(TodoService::new(repository))
}

/// Router with the /ready endpoint, which checks the store.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
