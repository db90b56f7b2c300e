pub mod health;

use axum::{routing::get, Router};

use crate::engineers::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Engineers API
        .route(
            "/api/v1/engineers",
            get(handlers::handle_list_engineers).post(handlers::handle_create_engineer),
        )
        .route(
            "/api/v1/engineers/:id",
            get(handlers::handle_get_engineer)
                .put(handlers::handle_update_engineer)
                .delete(handlers::handle_delete_engineer),
        )
        .with_state(state)
}
