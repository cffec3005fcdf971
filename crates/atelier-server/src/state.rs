use std::sync::Arc;

use atelier_cms::{ContentService, ImageUrlBuilder};
use atelier_core::FavoritesStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub favorites: Arc<FavoritesStore>,
    pub images: Arc<ImageUrlBuilder>,
    pub whatsapp_number: Option<String>,
    pub public_origin: String,
}

impl AppState {
    pub fn new(
        content: ContentService,
        favorites: FavoritesStore,
        images: ImageUrlBuilder,
    ) -> Self {
        Self {
            content: Arc::new(content),
            favorites: Arc::new(favorites),
            images: Arc::new(images),
            whatsapp_number: None,
            public_origin: "http://localhost:3000".to_string(),
        }
    }

    /// Number used instead of the one in the site settings.
    pub fn with_whatsapp_number(mut self, number: Option<String>) -> Self {
        self.whatsapp_number = number;
        self
    }

    pub fn with_public_origin(mut self, origin: impl Into<String>) -> Self {
        self.public_origin = origin.into();
        self
    }
}
