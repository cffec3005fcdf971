use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};

use atelier_cms::queries::DEFAULT_FEATURED_LIMIT;
use atelier_core::Artwork;

use crate::routes::artworks::image_url;
use crate::state::AppState;

const CARD_IMAGE_WIDTH: u32 = 600;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// A featured piece as shown on the index page.
struct Card {
    id: String,
    title: String,
    image_url: Option<String>,
    availability: &'static str,
}

async fn index(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let favorites_count = state.favorites.count();

    let (profile, featured) = tokio::join!(
        state.content.profile(),
        state.content.featured_artworks(DEFAULT_FEATURED_LIMIT)
    );

    let (profile, featured) = match (profile, featured) {
        (Ok(profile), Ok(featured)) => (profile, featured),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Failed to load index content: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Html(render_error("Failed to load content. Please try again later.")),
            );
        }
    };

    let artist = profile.map(|p| p.name).unwrap_or_else(|| "Atelier".to_string());
    let cards: Vec<Card> = featured
        .iter()
        .map(|artwork| card(&state, artwork))
        .collect();

    (
        StatusCode::OK,
        Html(render_index(&artist, &cards, favorites_count)),
    )
}

fn card(state: &AppState, artwork: &Artwork) -> Card {
    Card {
        id: artwork.id.clone(),
        title: artwork.title.clone(),
        image_url: artwork
            .cover_image()
            .and_then(|img| image_url(&state.images, img, CARD_IMAGE_WIDTH)),
        availability: artwork.availability.as_str(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_index(artist: &str, cards: &[Card], favorites_count: usize) -> String {
    let artist = escape(artist);
    let featured: String = if cards.is_empty() {
        r#"<p class="empty">No featured artworks yet.</p>"#.to_string()
    } else {
        cards
            .iter()
            .map(|card| {
                let image = match &card.image_url {
                    Some(url) => format!(
                        r#"<img src="{}" alt="{}" loading="lazy">"#,
                        escape(url),
                        escape(&card.title)
                    ),
                    None => String::new(),
                };
                format!(
                    r#"<article class="artwork" data-id="{}">
                    {}
                    <h3>{}</h3>
                    <span class="availability">{}</span>
                </article>"#,
                    escape(&card.id),
                    image,
                    escape(&card.title),
                    card.availability
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{artist}</title>
</head>
<body>
    <header>
        <h1>{artist}</h1>
        <p>Favorites: <span id="favorites-count">{favorites_count}</span></p>
    </header>

    <main>
        <section id="featured">
            <h2>Featured Artworks</h2>
            {featured}
        </section>
    </main>
</body>
</html>"##
    )
}

fn render_error(message: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Atelier</title>
</head>
<body>
    <section id="messages">
        <div class="error">{}</div>
    </section>
</body>
</html>"##,
        escape(message)
    )
}
