//! Cluster-based song recommendation endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use songkin_core::{recommend, Recommendation, RecommendError};

use crate::AppState;

/// Query parameters for the recommend endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Free-text song title; an absent parameter counts as blank
    #[serde(default)]
    pub song: String,
}

/// Successful recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub count: usize,
    pub recommendations: Vec<Recommendation>,
}

/// GET /api/recommend?song=NAME
///
/// Resolves the queried title against the catalog (exact match first,
/// then literal substring) and returns up to ten songs from the same
/// cluster, excluding the resolved title itself. An empty list is a
/// successful "no similar songs" outcome.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> Result<Json<RecommendResponse>, RecommendApiError> {
    let recommendations = recommend(&params.song, state.catalog.as_deref())
        .map_err(|err| RecommendApiError::new(err, &params.song))?;

    Ok(Json(RecommendResponse {
        query: params.song,
        count: recommendations.len(),
        recommendations,
    }))
}

/// Recommendation errors surfaced over HTTP
#[derive(Debug)]
pub enum RecommendApiError {
    EmptyQuery,
    SongNotFound(String),
    CatalogUnavailable,
}

impl RecommendApiError {
    fn new(err: RecommendError, query: &str) -> Self {
        match err {
            RecommendError::InvalidQuery => RecommendApiError::EmptyQuery,
            RecommendError::NotFound => RecommendApiError::SongNotFound(query.to_string()),
            RecommendError::CatalogUnavailable => RecommendApiError::CatalogUnavailable,
        }
    }
}

impl IntoResponse for RecommendApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecommendApiError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                "Please select a song from the list.".to_string(),
            ),
            RecommendApiError::SongNotFound(query) => (
                StatusCode::NOT_FOUND,
                format!("No songs in the catalog match '{}'.", query),
            ),
            RecommendApiError::CatalogUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Error: Song data could not be loaded.".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
