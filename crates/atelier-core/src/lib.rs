//! Atelier Core - Domain models, traits, and visitor-side logic.
//!
//! This crate holds the content models, the favorites store, search and
//! sorting, deep links and share fallbacks. It has no dependencies on other
//! Atelier crates and does no I/O of its own.

pub mod artwork;
pub mod clock;
pub mod content;
pub mod de;
pub mod error;
pub mod favorite;
pub mod favorites;
pub mod platform;
pub mod search;
pub mod share;
pub mod sort;
pub mod storage;
pub mod validation;
pub mod whatsapp;

// Re-exports for convenience
pub use artwork::{Artwork, AssetRef, Availability, DimensionUnit, Dimensions, ImageRef, Slug};
pub use clock::{Clock, SystemClock};
pub use content::{ArtistProfile, Coordinates, Location, Post, SiteSettings, SocialLinks};
pub use error::{CoreError, PlatformError, StorageError, ValidationError};
pub use favorite::FavoriteItem;
pub use favorites::FavoritesStore;
pub use platform::{Clipboard, LinkOpener, Notifier, ShareSheet, Toast, ToastKind};
pub use search::{filter_by, filter_counts, search, Field, Searchable, SearchableItem};
pub use share::{share, ShareData, ShareOutcome};
pub use sort::{sort_items, SortOrder, Sortable};
pub use storage::{FavoritesBackend, LegacyFavorites};
pub use validation::Validator;
pub use whatsapp::{compose_message, format_price, open_whatsapp, whatsapp_url, ContactIntent};

#[cfg(any(test, feature = "test-utils"))]
pub use clock::ManualClock;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::memory::{InMemoryFavoritesBackend, InMemoryLegacyFavorites};
