//! # Configuration
//!
//! Where the product service lives and how strictly its responses are checked.
//!
//! Values come from the environment and may be overridden on the command line:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CATALOG_API_URL` | `http://localhost:3000/api` | Base URL; `/products` is appended |
//! | `CATALOG_STRICT_STATUS` | `true` | Reject non-success responses on list/update/delete |

use url::Url;

use crate::model::ProductId;

pub const API_URL_ENV: &str = "CATALOG_API_URL";
pub const STRICT_STATUS_ENV: &str = "CATALOG_STRICT_STATUS";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

const COLLECTION_SEGMENT: &str = "products";

/// Errors raised while building a [`CatalogConfig`].
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Invalid value {value:?} for {name}: expected true or false")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    base_url: Url,
    /// When false, list/update parse any body and delete ignores the status code.
    pub strict_status: bool,
}

impl CatalogConfig {
    /// Builds a config for the given base URL with strict status checks.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            strict_status: true,
        })
    }

    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let mut config = Self::new(&base_url)?;
        if let Some(raw) = lookup(STRICT_STATUS_ENV) {
            config.strict_status = parse_flag(STRICT_STATUS_ENV, &raw)?;
        }
        Ok(config)
    }

    pub fn with_strict_status(mut self, strict_status: bool) -> Self {
        self.strict_status = strict_status;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/products`
    pub fn collection_url(&self) -> Url {
        self.url_with(&[COLLECTION_SEGMENT])
    }

    /// `{base}/products/{id}`, with the id percent-encoded as one path segment.
    pub fn item_url(&self, id: &ProductId) -> Url {
        self.url_with(&[COLLECTION_SEGMENT, id.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url guarantees the URL can carry path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: raw.to_owned(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_owned()));
    }
    Ok(url)
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_owned(),
        }),
    }
}
