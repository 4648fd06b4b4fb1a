//! songkin-web library - HTTP service over the recommendation engine
//!
//! Serves the browser UI and the JSON API. All matching and
//! recommendation logic lives in songkin-core; this crate owns catalog
//! loading, configuration, routing, and request/response shaping.

use std::sync::Arc;

use axum::Router;
use songkin_core::Catalog;

pub mod api;
pub mod config;
pub mod db;

/// Application state shared across HTTP handlers
///
/// The catalog is `None` when loading failed at startup; handlers then
/// answer with the catalog-unavailable error instead of crashing.
#[derive(Clone)]
pub struct AppState {
    /// Song catalog snapshot, absent in degraded mode
    pub catalog: Option<Arc<Catalog>>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Option<Arc<Catalog>>) -> Self {
        Self { catalog }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/songs", get(api::list_songs))
        .route("/api/recommend", get(api::get_recommendations))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
