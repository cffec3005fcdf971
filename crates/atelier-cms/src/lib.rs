//! Atelier CMS - Read-only client for the headless content API.

pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod protocol;
pub mod queries;
pub mod service;

pub use client::{CmsClient, HttpCmsClient};
pub use config::CmsConfig;
pub use error::CmsError;
pub use image::{Fit, ImageAsset, ImageOptions, ImageUrlBuilder};
pub use protocol::{GroqQuery, QueryKind, QueryResponse};
pub use service::ContentService;
