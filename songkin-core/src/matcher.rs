//! Two-phase title resolution and cluster-membership recommendation
//!
//! Resolution maps a free-text query to exactly one catalog entry: an
//! exact pass (case-insensitive full equality) over the catalog, then a
//! literal substring pass if the exact pass found nothing. The first
//! match in catalog order wins both passes; there is no scoring. The
//! resolved entry is then expanded into the other members of its
//! cluster, excluding entries that share the resolved title, capped to
//! [`MAX_RECOMMENDATIONS`].

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Song};
use crate::error::{RecommendError, Result};

/// Upper bound on the number of returned recommendations
pub const MAX_RECOMMENDATIONS: usize = 10;

/// One recommended song, projected to the fields the caller renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub artist: String,
}

/// Recommend songs from the cluster of the entry the query resolves to
///
/// The result is deterministic for a given (query, catalog) pair, holds
/// 0 to [`MAX_RECOMMENDATIONS`] entries in catalog order, and never
/// contains an entry whose title equals the resolved title (exact,
/// case-sensitive comparison, so distinct songs sharing a title drop
/// out together). An empty result is a successful outcome meaning "no
/// similar songs", not an error.
///
/// `catalog` is `None` when the loader failed at startup; every query
/// then fails with [`RecommendError::CatalogUnavailable`]. A blank
/// query is rejected before the catalog is consulted.
pub fn recommend(query: &str, catalog: Option<&Catalog>) -> Result<Vec<Recommendation>> {
    if query.trim().is_empty() {
        return Err(RecommendError::InvalidQuery);
    }
    let catalog = catalog.ok_or(RecommendError::CatalogUnavailable)?;

    let resolved = resolve(query, catalog)?;
    // resolve() never picks a song without a cluster; the contract maps
    // that case to NotFound rather than panicking.
    let cluster = resolved.cluster.ok_or(RecommendError::NotFound)?;

    let recommendations: Vec<Recommendation> = catalog
        .songs()
        .iter()
        .filter(|song| song.cluster == Some(cluster))
        .filter(|song| song.title != resolved.title)
        .take(MAX_RECOMMENDATIONS)
        .map(|song| Recommendation {
            title: song.title.clone(),
            artist: song.artist.clone(),
        })
        .collect();

    debug!(
        "'{}' resolved to '{}' (cluster {}), {} recommendation(s)",
        query,
        resolved.title,
        cluster,
        recommendations.len()
    );

    Ok(recommendations)
}

/// Map a query to exactly one catalog entry, or fail with NotFound
///
/// Songs without a cluster assignment are unmatchable and skipped by
/// both passes. The query is matched as typed: case folds, nothing
/// else is normalized.
fn resolve<'a>(query: &str, catalog: &'a Catalog) -> Result<&'a Song> {
    let needle = query.to_lowercase();

    // Exact pass: full title equality, first in catalog order wins.
    if let Some(song) = matchable(catalog).find(|song| song.title.to_lowercase() == needle) {
        return Ok(song);
    }

    // Fallback pass: substring containment. `str::contains` takes the
    // needle verbatim, so pattern metacharacters in the query cannot
    // change what matches.
    let mut matches =
        matchable(catalog).filter(|song| song.title.to_lowercase().contains(&needle));
    let first = matches.next().ok_or(RecommendError::NotFound)?;
    let extra = matches.count();
    if extra > 0 {
        debug!(
            "{} titles contain '{}', using the first in catalog order: '{}'",
            extra + 1,
            query,
            first.title
        );
    }

    Ok(first)
}

fn matchable(catalog: &Catalog) -> impl Iterator<Item = &Song> {
    catalog.songs().iter().filter(|song| song.cluster.is_some())
}
