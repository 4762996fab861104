//! Adventure API: HTTP host for a branching story graph.
//!
//! Loads a story at startup and serves read-only navigation over it. The
//! reader's current page travels with each request.

use axum::Router;

pub mod config;
pub mod content;
pub mod error;
pub mod routes;
pub mod sound;
pub mod state;

/// Builds the full application router.
pub fn build_router(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/story", routes::story::router())
        .with_state(app_state)
}
