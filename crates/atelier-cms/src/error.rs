use thiserror::Error;

use atelier_core::ValidationError;

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("CMS responded with HTTP {0}")]
    Status(u16),

    #[error("Unexpected CMS response: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
