//! NC News Backend
//!
//! A REST backend serving topics, articles, comments and users from SQLite.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NC News Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;

    if let Some(seed_path) = &config.seed_path {
        tracing::info!("Seeding database from {:?}", seed_path);
        let data = db::load_seed_file(seed_path).await?;
        db::seed(&pool, &data).await?;
    }

    let state = AppState {
        repo: Arc::new(Repository::new(pool)),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Topics
        .route("/topics", get(api::list_topics))
        // Users
        .route("/users", get(api::list_users))
        // Articles
        .route("/articles", get(api::list_articles))
        .route("/articles/{article_id}", get(api::get_article))
        .route("/articles/{article_id}", patch(api::patch_article_votes))
        .route(
            "/articles/{article_id}/comments",
            get(api::list_article_comments),
        )
        .route(
            "/articles/{article_id}/comments",
            post(api::create_comment),
        )
        // Comments
        .route("/comments/{comment_id}", delete(api::delete_comment));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .route("/api", get(api::get_endpoints))
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::route_not_found)
        .method_not_allowed_fallback(api::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
