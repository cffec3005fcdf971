use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use atelier_core::{FavoriteItem, Validator};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/favorites",
            get(list_favorites).post(add_favorite).delete(clear_favorites),
        )
        .route("/api/favorites/detailed", get(detailed_favorites))
        .route("/api/favorites/count", get(count_favorites))
        .route("/api/favorites/{id}", delete(remove_favorite))
        .route("/api/favorites/{id}/toggle", post(toggle_favorite))
}

#[derive(Serialize)]
pub struct FavoriteStatus {
    id: String,
    is_favorite: bool,
    count: usize,
}

impl FavoriteStatus {
    fn of(state: &AppState, id: String) -> Self {
        Self {
            is_favorite: state.favorites.is_favorite(&id),
            count: state.favorites.count(),
            id,
        }
    }
}

#[derive(Serialize)]
pub struct CountResponse {
    count: usize,
}

#[derive(Deserialize)]
pub struct AddFavoriteBody {
    id: String,
    title: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ToggleBody {
    title: Option<String>,
}

fn check(id: &str, title: Option<&str>) -> Result<(), ApiError> {
    Validator::validate_document_id(id)?;
    Validator::validate_title(title)?;
    Ok(())
}

async fn list_favorites(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut ids = state.favorites.list();
    ids.sort();
    Json(ids)
}

async fn detailed_favorites(State(state): State<AppState>) -> Json<Vec<FavoriteItem>> {
    Json(state.favorites.list_detailed())
}

async fn count_favorites(State(state): State<AppState>) -> Json<CountResponse> {
    Json(CountResponse {
        count: state.favorites.count(),
    })
}

async fn add_favorite(
    State(state): State<AppState>,
    Json(body): Json<AddFavoriteBody>,
) -> Result<(StatusCode, Json<FavoriteStatus>), ApiError> {
    check(&body.id, body.title.as_deref())?;

    state.favorites.add(&body.id, body.title.as_deref());
    Ok((StatusCode::CREATED, Json(FavoriteStatus::of(&state, body.id))))
}

/// The body is optional; an empty body toggles without a title.
async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<FavoriteStatus>, ApiError> {
    let body: ToggleBody = if body.iter().all(u8::is_ascii_whitespace) {
        ToggleBody::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?
    };
    check(&id, body.title.as_deref())?;

    state.favorites.toggle(&id, body.title.as_deref());
    Ok(Json(FavoriteStatus::of(&state, id)))
}

async fn remove_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteStatus>, ApiError> {
    Validator::validate_document_id(&id)?;

    state.favorites.remove(&id);
    Ok(Json(FavoriteStatus::of(&state, id)))
}

async fn clear_favorites(State(state): State<AppState>) -> StatusCode {
    state.favorites.clear();
    StatusCode::NO_CONTENT
}
