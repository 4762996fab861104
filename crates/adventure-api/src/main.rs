//! Adventure story API server entry point.

use adventure_api::config::AppConfig;
use adventure_api::content;
use adventure_api::error::AppError;
use adventure_api::state::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting adventure story API server");

    let config = AppConfig::from_env()?;

    // The graph is fully built before the listener accepts anything.
    let story = match &config.story_path {
        Some(path) => content::load_story_from_path(path)?,
        None => content::load_builtin_story()?,
    };

    let app = adventure_api::build_router(AppState::new(story))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
