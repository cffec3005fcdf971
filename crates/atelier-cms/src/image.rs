//! Image CDN URLs from asset references.

use atelier_core::{ImageRef, ValidationError};

use crate::config::CmsConfig;

const CDN_ORIGIN: &str = "https://cdn.sanity.io";

/// How the CDN fits the image into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Clip,
    Crop,
    Fill,
    FillMax,
    Max,
    Scale,
    Min,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fit::Clip => "clip",
            Fit::Crop => "crop",
            Fit::Fill => "fill",
            Fit::FillMax => "fillmax",
            Fit::Max => "max",
            Fit::Scale => "scale",
            Fit::Min => "min",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<Fit>,
}

impl ImageOptions {
    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }
}

/// An asset reference of the form `image-<id>-<W>x<H>-<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl std::str::FromStr for ImageAsset {
    type Err = ValidationError;

    fn from_str(reference: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidImageRef(reference.to_string());

        let rest = reference.strip_prefix("image-").ok_or_else(invalid)?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next().ok_or_else(invalid)?;
        let dims = parts.next().ok_or_else(invalid)?;
        let id = parts.next().ok_or_else(invalid)?;

        let (w, h) = dims.split_once('x').ok_or_else(invalid)?;
        let width = w.parse().map_err(|_| invalid())?;
        let height = h.parse().map_err(|_| invalid())?;

        if id.is_empty() || format.is_empty() || !format.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(invalid());
        }

        Ok(Self {
            id: id.to_string(),
            width,
            height,
            format: format.to_string(),
        })
    }
}

/// Builds CDN URLs for one project and dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn from_config(config: &CmsConfig) -> Self {
        Self::new(config.project_id.clone(), config.dataset.clone())
    }

    pub fn url(&self, image: &ImageRef, options: &ImageOptions) -> Result<String, ValidationError> {
        let asset: ImageAsset = image.asset.reference.parse()?;

        let mut url = format!(
            "{}/images/{}/{}/{}-{}x{}.{}",
            CDN_ORIGIN,
            self.project_id,
            self.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format
        );

        let mut params = Vec::new();
        if let Some(w) = options.width {
            params.push(format!("w={}", w));
        }
        if let Some(h) = options.height {
            params.push(format!("h={}", h));
        }
        if let Some(fit) = options.fit {
            params.push(format!("fit={}", fit.as_str()));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        Ok(url)
    }
}
