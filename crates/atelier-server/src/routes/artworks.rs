use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use atelier_cms::{queries::DEFAULT_FEATURED_LIMIT, ImageOptions, ImageUrlBuilder};
use atelier_core::{
    compose_message, filter_by, filter_counts, search, sort_items, whatsapp_url, Artwork,
    Availability, ContactIntent, Field, ImageRef, ShareData, SortOrder, Validator,
};

use crate::error::ApiError;
use crate::routes::contact::resolve_whatsapp_number;
use crate::state::AppState;

const MAX_FEATURED_LIMIT: usize = 50;
const LISTING_IMAGE_WIDTH: u32 = 800;
const GALLERY_IMAGE_WIDTH: u32 = 1600;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/artworks", get(list_artworks))
        .route("/api/artworks/featured", get(featured_artworks))
        .route("/api/artworks/categories", get(categories))
        .route("/api/artworks/search", get(search_artworks))
        .route("/api/artworks/slug/{slug}", get(artwork_by_slug))
        .route("/api/artworks/filters/{field}", get(filter_values))
        .route("/api/artworks/{id}", get(get_artwork))
        .route("/api/artworks/{id}/share", get(share_artwork))
        .route("/api/artworks/{id}/whatsapp", get(artwork_whatsapp))
}

/// Resolve an image to a CDN URL, logging and skipping malformed references.
pub(crate) fn image_url(images: &ImageUrlBuilder, image: &ImageRef, width: u32) -> Option<String> {
    match images.url(image, &ImageOptions::width(width)) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Skipping image: {}", e);
            None
        }
    }
}

#[derive(Serialize)]
pub struct ArtworkResponse {
    #[serde(flatten)]
    artwork: Artwork,
    main_image_url: Option<String>,
    image_urls: Vec<String>,
    is_favorite: bool,
}

impl ArtworkResponse {
    fn new(state: &AppState, artwork: Artwork) -> Self {
        let main_image_url = artwork
            .cover_image()
            .and_then(|img| image_url(&state.images, img, LISTING_IMAGE_WIDTH));
        let image_urls = artwork
            .images
            .iter()
            .filter_map(|img| image_url(&state.images, img, GALLERY_IMAGE_WIDTH))
            .collect();
        let is_favorite = state.favorites.is_favorite(&artwork.id);

        Self {
            artwork,
            main_image_url,
            image_urls,
            is_favorite,
        }
    }
}

fn responses(state: &AppState, artworks: Vec<Artwork>) -> Vec<ArtworkResponse> {
    artworks
        .into_iter()
        .map(|a| ArtworkResponse::new(state, a))
        .collect()
}

#[derive(Deserialize)]
pub struct ListParams {
    q: Option<String>,
    category: Option<String>,
    medium: Option<String>,
    availability: Option<String>,
    sort: Option<String>,
}

async fn list_artworks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    let order = match params.sort.as_deref() {
        Some(s) => s.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };
    let availability = match params.availability.as_deref() {
        Some(a) => Some(a.parse::<Availability>()?),
        None => None,
    };
    let query = params.q.unwrap_or_default();
    Validator::validate_query(&query)?;

    // Newest first from the CMS; every other order is applied below.
    let artworks = state
        .content
        .artworks(params.category.as_deref(), SortOrder::Latest)
        .await?;

    let mut matches = search(&artworks, &query);
    if let Some(medium) = params.medium.as_deref() {
        matches = filter_by(matches, Field::Medium, medium);
    }
    if let Some(availability) = availability {
        matches = filter_by(matches, Field::Availability, availability.as_str());
    }
    sort_items(&mut matches, order);

    let selected = matches.into_iter().cloned().collect();
    Ok(Json(responses(&state, selected)))
}

#[derive(Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// Prefix search run by the content API itself.
async fn search_artworks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    let artworks = state
        .content
        .search_artworks(params.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(responses(&state, artworks)))
}

#[derive(Deserialize)]
pub struct FeaturedParams {
    limit: Option<usize>,
}

async fn featured_artworks(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<Vec<ArtworkResponse>>, ApiError> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .min(MAX_FEATURED_LIMIT);
    let artworks = state.content.featured_artworks(limit).await?;
    Ok(Json(responses(&state, artworks)))
}

async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.content.categories().await?))
}

async fn filter_values(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<BTreeMap<String, usize>>, ApiError> {
    let field: Field = field.parse()?;
    let artworks = state.content.artworks(None, SortOrder::Latest).await?;
    Ok(Json(filter_counts(&artworks, field)))
}

async fn fetch_artwork(state: &AppState, id: &str) -> Result<Artwork, ApiError> {
    state
        .content
        .artwork_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Artwork"))
}

async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    let artwork = fetch_artwork(&state, &id).await?;
    Ok(Json(ArtworkResponse::new(&state, artwork)))
}

async fn artwork_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArtworkResponse>, ApiError> {
    let artwork = state
        .content
        .artwork_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Artwork"))?;
    Ok(Json(ArtworkResponse::new(&state, artwork)))
}

#[derive(Serialize)]
pub struct ShareResponse {
    #[serde(flatten)]
    data: ShareData,
    clipboard_text: String,
}

async fn share_artwork(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareResponse>, ApiError> {
    let artwork = fetch_artwork(&state, &id).await?;
    let data = ShareData::for_artwork(&artwork, &state.public_origin);
    Ok(Json(ShareResponse {
        clipboard_text: data.clipboard_text(),
        data,
    }))
}

#[derive(Deserialize)]
pub struct WhatsAppParams {
    intent: Option<String>,
    phone: Option<String>,
}

#[derive(Serialize)]
pub struct WhatsAppResponse {
    pub url: String,
    pub message: String,
}

async fn artwork_whatsapp(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<WhatsAppParams>,
) -> Result<Json<WhatsAppResponse>, ApiError> {
    let intent = match params.intent.as_deref() {
        Some(i) => i.parse::<ContactIntent>()?,
        None => ContactIntent::Inquiry,
    };

    let artwork = fetch_artwork(&state, &id).await?;
    let message = compose_message(intent, Some(&artwork))?;
    let phone = resolve_whatsapp_number(&state, params.phone).await?;
    let url = whatsapp_url(&phone, &message)?;

    Ok(Json(WhatsAppResponse { url, message }))
}
