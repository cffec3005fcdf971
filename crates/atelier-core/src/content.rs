//! Blog posts, the artist profile and site-wide settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::artwork::{ImageRef, Slug};
use crate::de;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub excerpt: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub featured: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    /// Portable-text body, passed through untouched.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: None,
            excerpt: String::new(),
            category: None,
            cover_image: None,
            published_at: None,
            featured: false,
            tags: Vec::new(),
            read_time: None,
            body: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<ImageRef>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub social_media: SocialLinks,
    #[serde(default)]
    pub artist_statement: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "de::nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "de::nullable")]
    pub country: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub social_media: SocialLinks,
}

impl SiteSettings {
    /// The configured WhatsApp number, if it is non-blank.
    pub fn whatsapp_number(&self) -> Option<&str> {
        self.whatsapp_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialize() {
        let json = r#"{
            "_id": "post-1",
            "title": "The Journey of Creation",
            "slug": {"current": "journey-of-creation"},
            "excerpt": "From inspiration to masterpiece.",
            "category": "Artistic Process",
            "publishedAt": "2024-03-15T09:00:00Z",
            "featured": null,
            "tags": ["process"],
            "readTime": "5 min read"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug.unwrap().current, "journey-of-creation");
        assert_eq!(post.published_at.unwrap().to_rfc3339(), "2024-03-15T09:00:00+00:00");
        assert!(!post.featured);
        assert!(post.body.is_none());
    }

    #[test]
    fn test_profile_deserialize_with_null_socials() {
        let json = r#"{
            "_id": "profile",
            "name": "Ada Brush",
            "bio": "Painter of light.",
            "email": "ada@example.com",
            "phone": null,
            "socialMedia": null
        }"#;

        let profile: ArtistProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ada Brush");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.social_media, SocialLinks::default());
    }

    #[test]
    fn test_settings_whatsapp_number() {
        let json = r#"{
            "_id": "siteSettings",
            "whatsappNumber": "  ",
            "location": {"address": "1 Main St", "city": "Lisbon", "country": "Portugal",
                         "coordinates": {"lat": 38.72, "lng": -9.14}}
        }"#;

        let mut settings: SiteSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.whatsapp_number(), None);
        assert_eq!(
            settings.location.as_ref().unwrap().coordinates,
            Some(Coordinates { lat: 38.72, lng: -9.14 })
        );

        settings.whatsapp_number = Some("+351 912 345 678".to_string());
        assert_eq!(settings.whatsapp_number(), Some("+351 912 345 678"));
    }
}
