use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which canned query is being run. Used for logging and test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Artworks,
    FeaturedArtworks,
    ArtworkById,
    ArtworkBySlug,
    SearchArtworks,
    Categories,
    Posts,
    FeaturedPosts,
    PostBySlug,
    Profile,
    Settings,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Artworks => "artworks",
            QueryKind::FeaturedArtworks => "featured_artworks",
            QueryKind::ArtworkById => "artwork_by_id",
            QueryKind::ArtworkBySlug => "artwork_by_slug",
            QueryKind::SearchArtworks => "search_artworks",
            QueryKind::Categories => "categories",
            QueryKind::Posts => "posts",
            QueryKind::FeaturedPosts => "featured_posts",
            QueryKind::PostBySlug => "post_by_slug",
            QueryKind::Profile => "profile",
            QueryKind::Settings => "settings",
        }
    }
}

/// A GROQ query plus its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqQuery {
    pub kind: QueryKind,
    pub groq: String,
    pub params: Vec<(String, Value)>,
}

impl GroqQuery {
    pub fn new(kind: QueryKind, groq: impl Into<String>) -> Self {
        Self {
            kind,
            groq: groq.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Query-string pairs: `query=<groq>` then `$name=<json value>` per parameter.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 1);
        pairs.push(("query".to_string(), self.groq.clone()));
        for (name, value) in &self.params {
            pairs.push((format!("${}", name), value.to_string()));
        }
        pairs
    }
}

/// Response envelope of the query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Value,
    /// Server-side query time in milliseconds.
    #[serde(default)]
    pub ms: Option<u64>,
}
