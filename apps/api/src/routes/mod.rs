pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template catalogue
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/templates/:id", get(handlers::handle_get_template))
        .route("/api/v1/icons", get(handlers::handle_list_icons))
        // Rendering
        .route("/api/v1/render", post(handlers::handle_render))
        .with_state(state)
}
