//! Game catalog domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog game entry.
///
/// `external_id` is the id assigned by the upstream catalog provider and is
/// the idempotency key for imports; everything else may be overwritten by a
/// re-import of the same external id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier (UUID format)
    pub id: String,
    /// Upstream catalog id (unique)
    pub external_id: String,
    pub title: String,
    pub description: String,
    /// Cover image URL
    pub cover_url: String,
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Game {
    /// Creates a new catalog entry with a fresh id.
    pub fn new(external_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            external_id: external_id.into(),
            title: title.into(),
            description: String::new(),
            cover_url: String::new(),
            release_date: None,
            platforms: Vec::new(),
            genres: Vec::new(),
        }
    }
}
