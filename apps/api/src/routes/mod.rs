pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::briefing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/grow-pulse/", post(handlers::handle_blog_body))
        .route("/grow-pulse/blog-intro", post(handlers::handle_blog_intro))
        .with_state(state)
}
