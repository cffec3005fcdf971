use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use atelier_core::{
    ArtistProfile, Artwork, Post, SiteSettings, SortOrder, Validator,
};

use crate::client::CmsClient;
use crate::error::CmsError;
use crate::protocol::GroqQuery;
use crate::queries;

/// Typed access to content documents.
///
/// Every payload is decoded into the core schemas here, so nothing past this
/// point sees untyped JSON.
pub struct ContentService {
    client: Arc<dyn CmsClient>,
}

#[derive(Deserialize)]
struct CategoryRow {
    #[serde(default)]
    category: Option<String>,
}

impl ContentService {
    pub fn new(client: Arc<dyn CmsClient>) -> Self {
        Self { client }
    }

    async fn fetch_many<T: DeserializeOwned>(&self, query: GroqQuery) -> Result<Vec<T>, CmsError> {
        let value = self.client.fetch_raw(&query).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        decode(&query, value)
    }

    async fn fetch_one<T: DeserializeOwned>(&self, query: GroqQuery) -> Result<Option<T>, CmsError> {
        let value = self.client.fetch_raw(&query).await?;
        if value.is_null() {
            return Ok(None);
        }
        decode(&query, value).map(Some)
    }

    pub async fn artworks(
        &self,
        category: Option<&str>,
        order: SortOrder,
    ) -> Result<Vec<Artwork>, CmsError> {
        self.fetch_many(queries::all_artworks(category, order)).await
    }

    pub async fn featured_artworks(&self, limit: usize) -> Result<Vec<Artwork>, CmsError> {
        self.fetch_many(queries::featured_artworks(limit)).await
    }

    pub async fn artwork_by_id(&self, id: &str) -> Result<Option<Artwork>, CmsError> {
        Validator::validate_document_id(id)?;
        self.fetch_one(queries::artwork_by_id(id)).await
    }

    pub async fn artwork_by_slug(&self, slug: &str) -> Result<Option<Artwork>, CmsError> {
        Validator::validate_slug(slug)?;
        self.fetch_one(queries::artwork_by_slug(slug)).await
    }

    /// Server-side prefix search. A blank term lists every artwork.
    pub async fn search_artworks(&self, term: &str) -> Result<Vec<Artwork>, CmsError> {
        Validator::validate_query(term)?;
        let term = term.trim();
        if term.is_empty() {
            return self.artworks(None, SortOrder::Latest).await;
        }
        self.fetch_many(queries::search_artworks(term)).await
    }

    /// Distinct non-empty categories, in first-seen order.
    pub async fn categories(&self) -> Result<Vec<String>, CmsError> {
        let rows: Vec<CategoryRow> = self.fetch_many(queries::artwork_categories()).await?;

        let mut seen = HashSet::new();
        Ok(rows
            .into_iter()
            .filter_map(|row| row.category)
            .filter(|c| !c.trim().is_empty())
            .filter(|c| seen.insert(c.clone()))
            .collect())
    }

    pub async fn posts(&self) -> Result<Vec<Post>, CmsError> {
        self.fetch_many(queries::all_posts()).await
    }

    pub async fn featured_posts(&self) -> Result<Vec<Post>, CmsError> {
        self.fetch_many(queries::featured_posts()).await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, CmsError> {
        Validator::validate_slug(slug)?;
        self.fetch_one(queries::post_by_slug(slug)).await
    }

    pub async fn profile(&self) -> Result<Option<ArtistProfile>, CmsError> {
        self.fetch_one(queries::artist_profile()).await
    }

    /// Site settings. Out-of-range map coordinates are dropped.
    pub async fn settings(&self) -> Result<Option<SiteSettings>, CmsError> {
        let mut settings: Option<SiteSettings> = self.fetch_one(queries::site_settings()).await?;

        if let Some(location) = settings.as_mut().and_then(|s| s.location.as_mut()) {
            if let Some(coordinates) = &location.coordinates {
                if let Err(e) = Validator::validate_coordinates(coordinates) {
                    tracing::warn!("Dropping site coordinates: {}", e);
                    location.coordinates = None;
                }
            }
        }

        Ok(settings)
    }
}

fn decode<T: DeserializeOwned>(query: &GroqQuery, value: Value) -> Result<T, CmsError> {
    serde_json::from_value(value)
        .map_err(|e| CmsError::Decode(format!("{}: {}", query.kind.as_str(), e)))
}
