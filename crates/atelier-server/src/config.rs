use std::net::SocketAddr;
use std::path::PathBuf;

use atelier_cms::config::{DEFAULT_API_VERSION, DEFAULT_DATASET};
use atelier_cms::CmsConfig;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
    pub legacy_favorites_path: Option<PathBuf>,
    pub cms: CmsConfig,
    /// Overrides the number from the site settings.
    pub whatsapp_number: Option<String>,
    pub public_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Blank values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let project_id =
            var("ATELIER_CMS_PROJECT_ID").ok_or(ConfigError::Missing("ATELIER_CMS_PROJECT_ID"))?;
        if !project_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::Invalid(
                "ATELIER_CMS_PROJECT_ID",
                "must contain only letters, digits and dashes",
            ));
        }

        let listen_addr = var("ATELIER_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("ATELIER_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let db_path = var("ATELIER_DB_PATH")
            .unwrap_or_else(|| "./atelier.redb".to_string())
            .into();

        let use_cdn = match var("ATELIER_CMS_USE_CDN").as_deref() {
            None | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(_) => {
                return Err(ConfigError::Invalid(
                    "ATELIER_CMS_USE_CDN",
                    "must be true, false, 1 or 0",
                ))
            }
        };

        let cms = CmsConfig {
            project_id,
            dataset: var("ATELIER_CMS_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            api_version: var("ATELIER_CMS_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            use_cdn,
            token: var("ATELIER_CMS_TOKEN"),
            api_host: None,
        };

        let public_origin = var("ATELIER_PUBLIC_ORIGIN")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            listen_addr,
            db_path,
            legacy_favorites_path: var("ATELIER_LEGACY_FAVORITES_PATH").map(PathBuf::from),
            cms,
            whatsapp_number: var("ATELIER_WHATSAPP_NUMBER"),
            public_origin,
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => {
                write!(f, "Missing required environment variable: {}", var)
            }
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
