pub mod artworks;
pub mod contact;
pub mod favorites;
pub mod health;
pub mod pages;
pub mod posts;
pub mod profile;

use axum::Router;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(artworks::routes())
        .merge(posts::routes())
        .merge(profile::routes())
        .merge(favorites::routes())
        .merge(contact::routes())
        .merge(health::routes())
        .with_state(state)
}
