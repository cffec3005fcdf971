use crate::content::Coordinates;
use crate::error::ValidationError;

const MAX_ID_LEN: usize = 128;
const MAX_TITLE_LEN: usize = 256;
const MAX_QUERY_LEN: usize = 200;

/// Validator for identifiers and visitor input.
pub struct Validator;

impl Validator {
    /// Validate a CMS document id.
    /// Must be non-empty, max 128 chars, and only contain [a-zA-Z0-9._-].
    pub fn validate_document_id(id: &str) -> Result<(), ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::InvalidId("id cannot be empty".to_string()));
        }
        if id.len() > MAX_ID_LEN {
            return Err(ValidationError::InvalidId(format!(
                "id too long: {} chars (max {})",
                id.len(),
                MAX_ID_LEN
            )));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(ValidationError::InvalidId(format!(
                "id contains invalid characters: {}",
                id
            )));
        }
        Ok(())
    }

    /// Validate a slug: non-empty, max 128 chars, [a-z0-9-] ignoring case.
    pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
        if slug.is_empty() || slug.len() > MAX_ID_LEN {
            return Err(ValidationError::InvalidSlug(slug.to_string()));
        }
        if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::InvalidSlug(slug.to_string()));
        }
        Ok(())
    }

    /// Validate an optional cached title. If present, max 256 chars.
    pub fn validate_title(title: Option<&str>) -> Result<(), ValidationError> {
        if let Some(t) = title {
            let len = t.chars().count();
            if len > MAX_TITLE_LEN {
                return Err(ValidationError::TitleTooLong(len));
            }
        }
        Ok(())
    }

    /// Validate a free-text search query.
    pub fn validate_query(query: &str) -> Result<(), ValidationError> {
        let len = query.chars().count();
        if len > MAX_QUERY_LEN {
            return Err(ValidationError::QueryTooLong(len));
        }
        Ok(())
    }

    /// Validate latitude value.
    pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
        if lat.is_nan() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::InvalidLatitude(lat));
        }
        Ok(())
    }

    /// Validate longitude value.
    pub fn validate_longitude(lng: f64) -> Result<(), ValidationError> {
        if lng.is_nan() || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::InvalidLongitude(lng));
        }
        Ok(())
    }

    pub fn validate_coordinates(coordinates: &Coordinates) -> Result<(), ValidationError> {
        Self::validate_latitude(coordinates.lat)?;
        Self::validate_longitude(coordinates.lng)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document_id() {
        assert!(Validator::validate_document_id("art-1").is_ok());
        assert!(Validator::validate_document_id("drafts.art_1").is_ok());
        assert!(Validator::validate_document_id("4f2b9c1e-7d").is_ok());
    }

    #[test]
    fn test_invalid_document_id() {
        assert!(Validator::validate_document_id("").is_err());
        assert!(Validator::validate_document_id("with space").is_err());
        assert!(Validator::validate_document_id("a\"]{").is_err());
        assert!(Validator::validate_document_id(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_slug() {
        assert!(Validator::validate_slug("golden-hour").is_ok());
        assert!(Validator::validate_slug("Golden-Hour-2").is_ok());
        assert!(Validator::validate_slug("").is_err());
        assert!(Validator::validate_slug("golden_hour").is_err());
        assert!(Validator::validate_slug("golden hour").is_err());
    }

    #[test]
    fn test_title() {
        assert!(Validator::validate_title(None).is_ok());
        assert!(Validator::validate_title(Some("Sunset")).is_ok());
        assert!(Validator::validate_title(Some(&"é".repeat(256))).is_ok());
        assert_eq!(
            Validator::validate_title(Some(&"A".repeat(257))),
            Err(ValidationError::TitleTooLong(257))
        );
    }

    #[test]
    fn test_query() {
        assert!(Validator::validate_query("oil landscape").is_ok());
        assert!(Validator::validate_query(&"q".repeat(201)).is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(Validator::validate_coordinates(&Coordinates { lat: 38.7, lng: -9.1 }).is_ok());
        assert!(Validator::validate_coordinates(&Coordinates { lat: 90.1, lng: 0.0 }).is_err());
        assert!(Validator::validate_coordinates(&Coordinates { lat: 0.0, lng: -180.1 }).is_err());
        assert!(Validator::validate_coordinates(&Coordinates { lat: f64::NAN, lng: 0.0 }).is_err());
    }
}
