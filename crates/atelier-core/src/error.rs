use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Title too long: {0} characters (max 256)")]
    TitleTooLong(usize),

    #[error("Query too long: {0} characters (max 200)")]
    QueryTooLong(usize),

    #[error("Invalid latitude {0}: must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("Invalid longitude {0}: must be between -180 and 180")]
    InvalidLongitude(f64),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown availability: {0}")]
    UnknownAvailability(String),

    #[error("Unknown sort order: {0}")]
    UnknownSort(String),

    #[error("Unknown contact intent: {0}")]
    UnknownIntent(String),

    #[error("WhatsApp number not available")]
    MissingPhone,

    #[error("Artwork is not for sale ({0})")]
    NotForSale(&'static str),

    #[error("Contact intent {0} requires an artwork")]
    MissingArtwork(&'static str),

    #[error("Malformed image reference: {0}")]
    InvalidImageRef(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Legacy data is corrupt: {0}")]
    CorruptLegacy(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Failures reported by platform integrations (share sheet, clipboard, link opener).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    #[error("Not supported on this platform")]
    Unsupported,

    #[error("Cancelled by the user")]
    Cancelled,

    #[error("{0}")]
    Failed(String),
}
