//! Song title listing for the selection control

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Response for the title list
#[derive(Debug, Serialize)]
pub struct SongListResponse {
    /// Distinct titles in catalog (first-occurrence) order
    pub titles: Vec<String>,
    pub count: usize,
    /// False when the catalog failed to load at startup
    pub catalog_loaded: bool,
}

/// GET /api/songs
///
/// Returns every distinct song title, for populating the selection
/// control. An absent catalog yields an empty list rather than an
/// error so the page still renders.
pub async fn list_songs(State(state): State<AppState>) -> Json<SongListResponse> {
    let titles = state
        .catalog
        .as_deref()
        .map(|catalog| catalog.distinct_titles().to_vec())
        .unwrap_or_default();

    Json(SongListResponse {
        count: titles.len(),
        catalog_loaded: state.catalog.is_some(),
        titles,
    })
}
