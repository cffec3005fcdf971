//! Deserialization helpers for CMS documents.
//!
//! GROQ projections yield `null` for fields a document does not carry, so most
//! fields accept `null` and fall back to their default.

use serde::{Deserialize, Deserializer};

/// Treat `null` as `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Accept a year as a JSON number or a numeric string.
pub fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("year out of range: {}", n))),
        Some(NumberOrString::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid year: {:?}", s)))
        }
    }
}
