//! Database access layer for songkin-web
//!
//! The song catalog lives in a SQLite database produced by the offline
//! clustering pipeline: one `songs` table with `track_name`,
//! `track_artist`, and `cluster_kmeans` columns. All connections are
//! read-only and the catalog is loaded once at startup.

use std::path::Path;

use anyhow::{Context, Result};
use songkin_core::{Catalog, Song};
use sqlx::SqlitePool;
use tracing::warn;

/// Connect to the song database in read-only mode
///
/// Safety: uses SQLite mode=ro so the service can never write the
/// catalog; immutable=1 additionally stops SQLite's own internal writes.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Song database not found: {}\nExport the clustered song table before starting the service.",
            db_path.display()
        );
    }

    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to open song database in read-only mode")?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: song database connection is not read-only!");
        }
    }

    Ok(pool)
}

/// Load the catalog from the `songs` table, preserving row order
///
/// Fails when the database, the table, or any of the three required
/// columns is missing; the caller then runs with an absent catalog
/// rather than aborting. Rows without a usable title are skipped; a
/// missing artist becomes an empty string; a missing cluster label
/// leaves the song unmatchable but still listed.
pub async fn load_catalog(db_path: &Path) -> Result<Catalog> {
    let pool = connect_readonly(db_path).await?;
    let catalog = fetch_catalog(&pool).await;
    // The catalog is fully in memory; the connection is only needed
    // during the load.
    pool.close().await;
    catalog
}

async fn fetch_catalog(pool: &SqlitePool) -> Result<Catalog> {
    let rows = sqlx::query_as::<_, (Option<String>, Option<String>, Option<i64>)>(
        "SELECT track_name, track_artist, cluster_kmeans FROM songs ORDER BY rowid",
    )
    .fetch_all(pool)
    .await
    .context("Failed to read columns track_name, track_artist, cluster_kmeans from the songs table")?;

    let mut songs = Vec::with_capacity(rows.len());
    for (title, artist, cluster) in rows {
        let title = match title {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                warn!("Skipping catalog row without a title");
                continue;
            }
        };
        songs.push(Song {
            title,
            artist: artist.unwrap_or_default(),
            cluster,
        });
    }

    Ok(Catalog::new(songs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Test helper: write a songs database with the given rows
    async fn create_songs_db(
        dir: &TempDir,
        rows: &[(Option<&str>, Option<&str>, Option<i64>)],
    ) -> PathBuf {
        let path = dir.path().join("songs.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new().connect(&url).await.unwrap();

        sqlx::query(
            "CREATE TABLE songs (track_name TEXT, track_artist TEXT, cluster_kmeans INTEGER)",
        )
        .execute(&pool)
        .await
        .unwrap();

        for (title, artist, cluster) in rows {
            sqlx::query(
                "INSERT INTO songs (track_name, track_artist, cluster_kmeans) VALUES (?, ?, ?)",
            )
            .bind(*title)
            .bind(*artist)
            .bind(*cluster)
            .execute(&pool)
            .await
            .unwrap();
        }

        pool.close().await;
        path
    }

    #[tokio::test]
    async fn test_load_catalog_preserves_order_and_nulls() {
        let dir = TempDir::new().unwrap();
        let path = create_songs_db(
            &dir,
            &[
                (Some("Shape of You"), Some("Ed Sheeran"), Some(3)),
                (Some("Photograph"), None, Some(3)),
                (Some("Stray"), Some("Nobody"), None),
            ],
        )
        .await;

        let catalog = load_catalog(&path).await.unwrap();
        assert_eq!(catalog.len(), 3);

        let songs = catalog.songs();
        assert_eq!(songs[0].title, "Shape of You");
        assert_eq!(songs[0].artist, "Ed Sheeran");
        assert_eq!(songs[0].cluster, Some(3));
        assert_eq!(songs[1].artist, "", "NULL artist becomes empty string");
        assert_eq!(songs[2].cluster, None, "NULL cluster stays unassigned");
    }

    #[tokio::test]
    async fn test_load_catalog_skips_titleless_rows() {
        let dir = TempDir::new().unwrap();
        let path = create_songs_db(
            &dir,
            &[
                (None, Some("Ghost"), Some(1)),
                (Some("   "), Some("Blank"), Some(1)),
                (Some("Real Song"), Some("Somebody"), Some(1)),
            ],
        )
        .await;

        let catalog = load_catalog(&path).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.songs()[0].title, "Real Song");
    }

    #[tokio::test]
    async fn test_load_catalog_missing_column_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("songs.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new().connect(&url).await.unwrap();
        sqlx::query("CREATE TABLE songs (track_name TEXT, track_artist TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let result = load_catalog(&path).await;
        assert!(result.is_err(), "missing cluster column must fail the load");
    }

    #[tokio::test]
    async fn test_load_catalog_missing_table_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("songs.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let pool = SqlitePoolOptions::new().connect(&url).await.unwrap();
        // Touch the database so the file exists without the songs table.
        sqlx::query("CREATE TABLE unrelated (id INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let result = load_catalog(&path).await;
        assert!(result.is_err(), "missing songs table must fail the load");
    }

    #[tokio::test]
    async fn test_connect_readonly_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.db");

        let result = connect_readonly(&path).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connect_readonly_rejects_writes() {
        let dir = TempDir::new().unwrap();
        let path = create_songs_db(&dir, &[(Some("Only Song"), Some("Solo"), Some(1))]).await;

        let pool = connect_readonly(&path)
            .await
            .expect("Should connect in read-only mode");

        let result = sqlx::query(
            "INSERT INTO songs (track_name, track_artist, cluster_kmeans) VALUES ('X', 'Y', 2)",
        )
        .execute(&pool)
        .await;

        assert!(
            result.is_err(),
            "Write operation should fail in read-only mode"
        );
    }
}
