//! One-off catalog import.
//!
//! Reads a JSON array of catalog records (the shape produced by the catalog
//! export script) and upserts each entry by external id, so re-running an
//! import refreshes rather than duplicates.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use playcove_core::error::{CoveError, Result};
use playcove_core::game::{GameService, GameUpsert};

/// One game record as exported by the catalog fetch script.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGameRecord {
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_url: String,
    /// `YYYY-MM-DD`; unparseable dates are dropped with a warning
    pub release_date: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl CatalogGameRecord {
    fn into_upsert(self) -> GameUpsert {
        let release_date = self.release_date.as_deref().and_then(|raw| {
            match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(err) => {
                    tracing::warn!(title = %self.title, %raw, %err, "Dropping unparseable release date");
                    None
                }
            }
        });

        GameUpsert {
            external_id: self.external_id,
            title: self.title,
            description: self.description,
            cover_url: self.cover_url,
            release_date,
            platforms: self.platforms,
            genres: self.genres,
        }
    }
}

/// Imports a catalog file, returning how many records were upserted.
///
/// Records that fail validation are skipped with a warning; a malformed file
/// is an error.
pub async fn import_catalog_file(path: impl AsRef<Path>, games: &GameService) -> Result<usize> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| CoveError::config(format!("cannot read {}: {err}", path.display())))?;
    let records: Vec<CatalogGameRecord> = serde_json::from_str(&raw)?;

    let total = records.len();
    let mut imported = 0usize;
    for record in records {
        let title = record.title.clone();
        match games.upsert(record.into_upsert()).await {
            Ok(_) => imported += 1,
            Err(err) => {
                tracing::warn!(%title, %err, "Skipping catalog record");
            }
        }
    }

    tracing::info!(imported, total, path = %path.display(), "Catalog import finished");
    Ok(imported)
}
