//! Client-side search and facet counting over in-memory collections.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::artwork::Artwork;
use crate::content::Post;
use crate::error::ValidationError;

/// A field that can be searched or counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Medium,
    Category,
    Series,
    Year,
    Availability,
}

impl Field {
    /// Fields concatenated for free-text search, in this order.
    pub const SEARCHED: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Medium,
        Field::Category,
        Field::Series,
        Field::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Medium => "medium",
            Field::Category => "category",
            Field::Series => "series",
            Field::Year => "year",
            Field::Availability => "availability",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Field::Title),
            "description" => Ok(Field::Description),
            "medium" => Ok(Field::Medium),
            "category" => Ok(Field::Category),
            "series" => Ok(Field::Series),
            "year" => Ok(Field::Year),
            "availability" => Ok(Field::Availability),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Something that exposes its fields for search and filtering.
pub trait Searchable {
    /// The value of `field`, or `None` when the item does not carry it.
    fn field(&self, field: Field) -> Option<Cow<'_, str>>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        (**self).field(field)
    }
}

/// A view-local projection used only for filtering; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchableItem {
    pub title: String,
    pub description: Option<String>,
    pub medium: Option<String>,
    pub category: Option<String>,
    pub series: Option<String>,
    pub year: Option<String>,
    pub availability: Option<String>,
}

impl SearchableItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

fn non_empty(value: &str) -> Option<Cow<'_, str>> {
    if value.is_empty() {
        None
    } else {
        Some(Cow::Borrowed(value))
    }
}

fn non_empty_opt(value: &Option<String>) -> Option<Cow<'_, str>> {
    value.as_deref().and_then(non_empty)
}

impl Searchable for SearchableItem {
    fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Title => non_empty(&self.title),
            Field::Description => non_empty_opt(&self.description),
            Field::Medium => non_empty_opt(&self.medium),
            Field::Category => non_empty_opt(&self.category),
            Field::Series => non_empty_opt(&self.series),
            Field::Year => non_empty_opt(&self.year),
            Field::Availability => non_empty_opt(&self.availability),
        }
    }
}

impl Searchable for Artwork {
    fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Title => non_empty(&self.title),
            Field::Description => non_empty(&self.description),
            Field::Medium => non_empty(&self.medium),
            Field::Category => non_empty_opt(&self.category),
            Field::Series => non_empty_opt(&self.series),
            Field::Year => self.year.map(|y| Cow::Owned(y.to_string())),
            Field::Availability => Some(Cow::Borrowed(self.availability.as_str())),
        }
    }
}

impl Searchable for Post {
    fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Title => non_empty(&self.title),
            Field::Description => non_empty(&self.excerpt),
            Field::Category => non_empty_opt(&self.category),
            // Posts have no series; their tags take its place.
            Field::Series => {
                if self.tags.is_empty() {
                    None
                } else {
                    Some(Cow::Owned(self.tags.join(" ")))
                }
            }
            Field::Year => self
                .published_at
                .map(|at| Cow::Owned(at.format("%Y").to_string())),
            Field::Medium | Field::Availability => None,
        }
    }
}

fn haystack<T: Searchable>(item: &T) -> String {
    Field::SEARCHED
        .iter()
        .filter_map(|f| item.field(*f))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Keep the items whose searchable fields contain every word of `query`.
///
/// Matching is case-insensitive substring matching per whitespace-separated
/// token. Items whose title contains the whole query move to the front;
/// otherwise the input order is kept. A blank query returns every item in
/// its original order.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }

    let words: Vec<&str> = term.split_whitespace().collect();
    let mut matches: Vec<&T> = items
        .iter()
        .filter(|item| {
            let fields = haystack(*item);
            words.iter().all(|w| fields.contains(w))
        })
        .collect();

    // Stable sort: title hits first, relative order otherwise unchanged.
    matches.sort_by_key(|item| {
        let title = item
            .field(Field::Title)
            .map(|t| t.to_lowercase())
            .unwrap_or_default();
        !title.contains(&term)
    });

    matches
}

/// Count how often each non-empty value of `field` occurs.
pub fn filter_counts<T: Searchable>(items: &[T], field: Field) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        if let Some(value) = item.field(field) {
            *counts.entry(value.into_owned()).or_insert(0) += 1;
        }
    }
    counts
}

/// Keep only items whose `field` equals `value`, ignoring ASCII case.
pub fn filter_by<'a, T: Searchable>(items: Vec<&'a T>, field: Field, value: &str) -> Vec<&'a T> {
    items
        .into_iter()
        .filter(|item| {
            item.field(field)
                .map(|v| v.eq_ignore_ascii_case(value))
                .unwrap_or(false)
        })
        .collect()
}
