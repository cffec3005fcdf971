/// Connection settings for the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    /// Date-style API version, e.g. `2024-03-01`.
    pub api_version: String,
    pub use_cdn: bool,
    /// Bearer token for private datasets.
    pub token: Option<String>,
    /// Replaces the whole origin (scheme and host).
    pub api_host: Option<String>,
}

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-03-01";

impl CmsConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: false,
            token: None,
            api_host: None,
        }
    }

    /// Query endpoint for this project and dataset.
    pub fn endpoint(&self) -> String {
        let origin = match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => {
                let host = if self.use_cdn { "apicdn" } else { "api" };
                format!("https://{}.{}.sanity.io", self.project_id, host)
            }
        };
        format!(
            "{}/v{}/data/query/{}",
            origin, self.api_version, self.dataset
        )
    }
}
