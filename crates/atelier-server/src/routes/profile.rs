use axum::{extract::State, routing::get, Json, Router};

use atelier_core::{ArtistProfile, SiteSettings};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/profile", get(profile))
        .route("/api/settings", get(settings))
}

async fn profile(State(state): State<AppState>) -> Result<Json<ArtistProfile>, ApiError> {
    state
        .content
        .profile()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Artist profile"))
}

async fn settings(State(state): State<AppState>) -> Result<Json<SiteSettings>, ApiError> {
    state
        .content
        .settings()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Site settings"))
}
