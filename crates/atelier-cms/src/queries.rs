//! Canned GROQ queries. Visitor input only ever travels as a bound parameter.

use atelier_core::SortOrder;

use crate::protocol::{GroqQuery, QueryKind};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;

const ARTWORK_FIELDS: &str = r#"{
    _id,
    title,
    slug,
    description,
    longDescription,
    price,
    images,
    mainImage,
    dimensions,
    medium,
    year,
    category,
    series,
    availability,
    featured,
    tags
  }"#;

const POST_FIELDS: &str = r#"{
    _id,
    title,
    slug,
    excerpt,
    category,
    coverImage,
    publishedAt,
    featured,
    tags,
    readTime
  }"#;

const POST_DETAIL_FIELDS: &str = r#"{
    _id,
    title,
    slug,
    excerpt,
    category,
    coverImage,
    publishedAt,
    featured,
    tags,
    readTime,
    body
  }"#;

/// Server-side ordering. Orders the CMS cannot express fall back to newest first.
fn artwork_order(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Oldest => "order(_createdAt asc)",
        SortOrder::PriceLow => "order(price asc)",
        SortOrder::PriceHigh => "order(price desc)",
        _ => "order(_createdAt desc)",
    }
}

/// All artworks, optionally in one category. `"all"` means no category filter.
pub fn all_artworks(category: Option<&str>, order: SortOrder) -> GroqQuery {
    let category = category.filter(|c| !c.is_empty() && *c != "all");
    let filter = if category.is_some() {
        r#"_type == "artwork" && category == $category"#
    } else {
        r#"_type == "artwork""#
    };
    let groq = format!(
        "*[{}] {} | {}",
        filter,
        ARTWORK_FIELDS,
        artwork_order(order)
    );

    let query = GroqQuery::new(QueryKind::Artworks, groq);
    match category {
        Some(c) => query.param("category", c),
        None => query,
    }
}

pub fn featured_artworks(limit: usize) -> GroqQuery {
    let groq = format!(
        r#"*[_type == "artwork" && featured == true] {} | order(_createdAt desc) [0...{}]"#,
        ARTWORK_FIELDS, limit
    );
    GroqQuery::new(QueryKind::FeaturedArtworks, groq)
}

pub fn artwork_by_id(id: &str) -> GroqQuery {
    let groq = format!(
        r#"*[_type == "artwork" && _id == $id][0] {}"#,
        ARTWORK_FIELDS
    );
    GroqQuery::new(QueryKind::ArtworkById, groq).param("id", id)
}

pub fn artwork_by_slug(slug: &str) -> GroqQuery {
    let groq = format!(
        r#"*[_type == "artwork" && slug.current == $slug][0] {}"#,
        ARTWORK_FIELDS
    );
    GroqQuery::new(QueryKind::ArtworkBySlug, groq).param("slug", slug)
}

/// Prefix match of `term` across title, description, category and medium.
pub fn search_artworks(term: &str) -> GroqQuery {
    let groq = format!(
        r#"*[_type == "artwork" && (
    title match $term ||
    description match $term ||
    category match $term ||
    medium match $term
  )] {} | order(_createdAt desc)"#,
        ARTWORK_FIELDS
    );
    GroqQuery::new(QueryKind::SearchArtworks, groq).param("term", format!("{}*", term))
}

pub fn artwork_categories() -> GroqQuery {
    GroqQuery::new(
        QueryKind::Categories,
        r#"*[_type == "artwork" && defined(category)] | order(category asc) { "category": category }"#,
    )
}

pub fn all_posts() -> GroqQuery {
    let groq = format!(
        r#"*[_type == "post"] | order(publishedAt desc) {}"#,
        POST_FIELDS
    );
    GroqQuery::new(QueryKind::Posts, groq)
}

pub fn featured_posts() -> GroqQuery {
    let groq = format!(
        r#"*[_type == "post" && featured == true] | order(publishedAt desc) {}"#,
        POST_FIELDS
    );
    GroqQuery::new(QueryKind::FeaturedPosts, groq)
}

pub fn post_by_slug(slug: &str) -> GroqQuery {
    let groq = format!(
        r#"*[_type == "post" && slug.current == $slug][0] {}"#,
        POST_DETAIL_FIELDS
    );
    GroqQuery::new(QueryKind::PostBySlug, groq).param("slug", slug)
}

pub fn artist_profile() -> GroqQuery {
    GroqQuery::new(
        QueryKind::Profile,
        r#"*[_type == "artistProfile"][0] {
    _id,
    name,
    bio,
    profileImage,
    coverImage,
    email,
    phone,
    address,
    socialMedia,
    artistStatement,
    workingHours
  }"#,
    )
}

pub fn site_settings() -> GroqQuery {
    GroqQuery::new(
        QueryKind::Settings,
        r#"*[_type == "siteSettings"][0] {
    _id,
    whatsappNumber,
    businessHours,
    location,
    socialMedia
  }"#,
    )
}
