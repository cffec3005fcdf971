use serde::{Deserialize, Serialize};

use crate::de;

/// Sale state of an artwork.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Sold,
    Reserved,
    /// Shown in the portfolio only, never offered for sale.
    Portfolio,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Sold => "sold",
            Availability::Reserved => "reserved",
            Availability::Portfolio => "portfolio",
        }
    }

    /// Whether a purchase can be started for this piece.
    pub fn is_purchasable(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "sold" => Ok(Availability::Sold),
            "reserved" => Ok(Availability::Reserved),
            "portfolio" => Ok(Availability::Portfolio),
            other => Err(crate::error::ValidationError::UnknownAvailability(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Cm,
    In,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match self.unit {
            DimensionUnit::Cm => "cm",
            DimensionUnit::In => "in",
        };
        write!(f, "{} x {} {}", self.width, self.height, unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// Reference to an image asset held by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: AssetRef,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            asset: AssetRef {
                reference: reference.into(),
            },
            alt: None,
        }
    }
}

/// An artwork document as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    /// Plain number in the shop currency.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub medium: String,
    #[serde(default, deserialize_with = "de::year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub availability: Availability,
    #[serde(default, deserialize_with = "de::nullable")]
    pub featured: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub tags: Vec<String>,
}

impl Artwork {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: None,
            description: String::new(),
            long_description: None,
            price: None,
            images: Vec::new(),
            main_image: None,
            dimensions: None,
            medium: String::new(),
            year: None,
            category: None,
            series: None,
            availability: Availability::default(),
            featured: false,
            tags: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = medium.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// The image to show in listings: the main image, else the first gallery image.
    pub fn cover_image(&self) -> Option<&ImageRef> {
        self.main_image.as_ref().or_else(|| self.images.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "_id": "art-1",
            "_type": "artwork",
            "title": "Golden Hour",
            "slug": {"current": "golden-hour"},
            "description": "Sunset over Tuscany",
            "longDescription": null,
            "price": 1250,
            "images": [{"_type": "image", "asset": {"_ref": "image-abc-800x600-jpg", "_type": "reference"}}],
            "mainImage": {"asset": {"_ref": "image-main-1200x900-png"}, "alt": "Hills"},
            "dimensions": {"width": 24, "height": 36, "unit": "in"},
            "medium": "Oil on canvas",
            "year": 2023,
            "category": "Landscape",
            "availability": "reserved",
            "featured": true,
            "tags": ["sunset", "hills"]
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, "art-1");
        assert_eq!(artwork.price, Some(1250.0));
        assert_eq!(artwork.availability, Availability::Reserved);
        assert_eq!(artwork.year, Some(2023));
        assert_eq!(artwork.images.len(), 1);
        assert_eq!(artwork.cover_image().unwrap().asset.reference, "image-main-1200x900-png");
        assert_eq!(artwork.dimensions.unwrap().to_string(), "24 x 36 in");
    }

    #[test]
    fn test_deserialize_sparse_document() {
        let json = r#"{
            "_id": "art-2",
            "title": "Untitled",
            "description": null,
            "images": null,
            "medium": null,
            "availability": null,
            "featured": null,
            "tags": null
        }"#;

        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.description, "");
        assert!(artwork.images.is_empty());
        assert_eq!(artwork.availability, Availability::Available);
        assert!(!artwork.featured);
        assert!(artwork.cover_image().is_none());
    }

    #[test]
    fn test_unknown_availability_rejected() {
        let json = r#"{"_id": "x", "title": "X", "availability": "on-loan"}"#;
        let result: Result<Artwork, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_title_rejected() {
        let result: Result<Artwork, _> = serde_json::from_str(r#"{"_id": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_availability_parse_and_display() {
        assert_eq!("Sold".parse::<Availability>().unwrap(), Availability::Sold);
        assert_eq!(Availability::Portfolio.to_string(), "portfolio");
        assert!("lost".parse::<Availability>().is_err());
        assert!(Availability::Available.is_purchasable());
        assert!(!Availability::Sold.is_purchasable());
    }
}
