use std::cmp::Ordering;

use crate::artwork::Artwork;
use crate::content::Post;
use crate::error::ValidationError;

/// Display order for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Order as delivered by the CMS.
    #[default]
    Latest,
    Oldest,
    YearAsc,
    YearDesc,
    PriceLow,
    PriceHigh,
    Title,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Oldest => "oldest",
            SortOrder::YearAsc => "year-asc",
            SortOrder::YearDesc => "year-desc",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Title => "title",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(SortOrder::Latest),
            "oldest" => Ok(SortOrder::Oldest),
            "year-asc" => Ok(SortOrder::YearAsc),
            "year-desc" => Ok(SortOrder::YearDesc),
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "title" => Ok(SortOrder::Title),
            other => Err(ValidationError::UnknownSort(other.to_string())),
        }
    }
}

/// Keys an item can be ordered by.
pub trait Sortable {
    fn sort_title(&self) -> &str;
    fn sort_year(&self) -> Option<i32>;
    fn sort_price(&self) -> Option<f64>;
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_title(&self) -> &str {
        (**self).sort_title()
    }

    fn sort_year(&self) -> Option<i32> {
        (**self).sort_year()
    }

    fn sort_price(&self) -> Option<f64> {
        (**self).sort_price()
    }
}

impl Sortable for Artwork {
    fn sort_title(&self) -> &str {
        &self.title
    }

    fn sort_year(&self) -> Option<i32> {
        self.year
    }

    fn sort_price(&self) -> Option<f64> {
        self.price
    }
}

impl Sortable for Post {
    fn sort_title(&self) -> &str {
        &self.title
    }

    fn sort_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.published_at.map(|at| at.year())
    }

    fn sort_price(&self) -> Option<f64> {
        None
    }
}

/// Present values first in the requested direction, missing values last.
fn missing_last<K>(a: Option<K>, b: Option<K>, cmp: impl Fn(&K, &K) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Reorder `items` in place. All orders are stable.
pub fn sort_items<T: Sortable>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Latest => {}
        SortOrder::Oldest => items.reverse(),
        SortOrder::YearAsc => {
            items.sort_by(|a, b| missing_last(a.sort_year(), b.sort_year(), |x, y| x.cmp(y)))
        }
        SortOrder::YearDesc => {
            items.sort_by(|a, b| missing_last(a.sort_year(), b.sort_year(), |x, y| y.cmp(x)))
        }
        SortOrder::PriceLow => items.sort_by(|a, b| {
            missing_last(a.sort_price(), b.sort_price(), |x, y| x.total_cmp(y))
        }),
        SortOrder::PriceHigh => items.sort_by(|a, b| {
            missing_last(a.sort_price(), b.sort_price(), |x, y| y.total_cmp(x))
        }),
        SortOrder::Title => {
            items.sort_by_cached_key(|item| item.sort_title().to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<Artwork> {
        vec![
            Artwork::new("a", "tide").with_year(2022).with_price(900.0),
            Artwork::new("b", "Amber").with_price(2500.0),
            Artwork::new("c", "Birch").with_year(2024),
            Artwork::new("d", "Cove").with_year(2022).with_price(150.5),
        ]
    }

    fn ids(items: &[Artwork]) -> Vec<&str> {
        items.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_latest_keeps_order() {
        let mut items = gallery();
        sort_items(&mut items, SortOrder::Latest);
        assert_eq!(ids(&items), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_oldest_reverses() {
        let mut items = gallery();
        sort_items(&mut items, SortOrder::Oldest);
        assert_eq!(ids(&items), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_year_missing_last() {
        let mut items = gallery();
        sort_items(&mut items, SortOrder::YearAsc);
        assert_eq!(ids(&items), vec!["a", "d", "c", "b"]);

        let mut items = gallery();
        sort_items(&mut items, SortOrder::YearDesc);
        assert_eq!(ids(&items), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_price_missing_last() {
        let mut items = gallery();
        sort_items(&mut items, SortOrder::PriceLow);
        assert_eq!(ids(&items), vec!["d", "a", "b", "c"]);

        let mut items = gallery();
        sort_items(&mut items, SortOrder::PriceHigh);
        assert_eq!(ids(&items), vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_title_case_insensitive() {
        let mut items = gallery();
        sort_items(&mut items, SortOrder::Title);
        assert_eq!(ids(&items), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_sort_references() {
        let items = gallery();
        let mut refs: Vec<&Artwork> = items.iter().collect();
        sort_items(&mut refs, SortOrder::PriceLow);
        assert_eq!(refs[0].id, "d");
    }

    #[test]
    fn test_parse() {
        assert_eq!("year-desc".parse::<SortOrder>().unwrap(), SortOrder::YearDesc);
        assert_eq!(SortOrder::PriceHigh.as_str(), "price-high");
        assert_eq!(SortOrder::default(), SortOrder::Latest);
        assert!("cheapest".parse::<SortOrder>().is_err());
    }
}
