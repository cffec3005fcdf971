use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor-local bookmark of an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Artwork id.
    pub id: String,
    /// Title cached for display, so listings work without a CMS round-trip.
    pub title: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl FavoriteItem {
    pub fn new(id: impl Into<String>, title: Option<String>, date_added: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title,
            date_added,
        }
    }
}

/// Order records newest first; equal timestamps fall back to id order.
pub fn newest_first(items: &mut [FavoriteItem]) {
    items.sort_by(|a, b| {
        b.date_added
            .cmp(&a.date_added)
            .then_with(|| a.id.cmp(&b.id))
    });
}
