use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_cms::{ContentService, HttpCmsClient, ImageUrlBuilder};
use atelier_core::FavoritesStore;
use atelier_db::{init_database, LegacyFavoritesFile, RedbFavoritesBackend};
use atelier_server::{routes, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Required: ATELIER_CMS_PROJECT_ID=<project>");
            eprintln!(
                "Optional: ATELIER_LISTEN_ADDR, ATELIER_DB_PATH, ATELIER_LEGACY_FAVORITES_PATH,"
            );
            eprintln!(
                "          ATELIER_CMS_DATASET, ATELIER_CMS_API_VERSION, ATELIER_CMS_USE_CDN,"
            );
            eprintln!(
                "          ATELIER_CMS_TOKEN, ATELIER_WHATSAPP_NUMBER, ATELIER_PUBLIC_ORIGIN"
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Atelier server");
    tracing::info!("CMS endpoint: {}", config.cms.endpoint());
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Database path: {}", config.db_path.display());

    // Initialize database
    let db = match init_database(&config.db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let mut favorites = FavoritesStore::new(Arc::new(RedbFavoritesBackend::new(db)));
    if let Some(path) = &config.legacy_favorites_path {
        favorites = favorites.with_legacy(Arc::new(LegacyFavoritesFile::new(path)));
    }
    favorites.migrate_legacy();

    let images = ImageUrlBuilder::from_config(&config.cms);
    let content = ContentService::new(Arc::new(HttpCmsClient::new(config.cms.clone())));

    // Create app state
    let state = AppState::new(content, favorites, images)
        .with_whatsapp_number(config.whatsapp_number.clone())
        .with_public_origin(config.public_origin.clone());

    // Build router
    let app = routes::create_router(state).layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
