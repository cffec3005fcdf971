use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use atelier_core::{search, Post, Validator};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{slug}", get(get_post))
}

#[derive(Deserialize)]
pub struct PostParams {
    #[serde(default)]
    featured: bool,
    q: Option<String>,
}

async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostParams>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let query = params.q.unwrap_or_default();
    Validator::validate_query(&query)?;

    let posts = if params.featured {
        state.content.featured_posts().await?
    } else {
        state.content.posts().await?
    };

    let matches = search(&posts, &query).into_iter().cloned().collect();
    Ok(Json(matches))
}

async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    state
        .content
        .post_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Post"))
}
