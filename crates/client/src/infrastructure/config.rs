//! Service endpoint configuration.

use url::Url;

/// Default page origin; the decode endpoint lives under it.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";

/// Default recall endpoint.
pub const DEFAULT_RECALL_URL: &str = "http://127.0.0.1:5000/get_recalls";

/// Path of the decode endpoint relative to the origin.
pub const DECODE_PATH: &str = "/decode_vin";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid URL for {name}: {value} ({source})")]
    InvalidUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
}

/// Endpoints for the decode and recall services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub decode_url: Url,
    pub recall_url: Url,
}

impl LookupConfig {
    /// Build from an origin (decode URL is `{origin}/decode_vin`) and a recall URL.
    pub fn new(origin: &str, recall_url: &str) -> Result<Self, ConfigError> {
        let origin = parse_url("VINLOOKUP_ORIGIN", origin)?;
        let decode_url = origin
            .join(DECODE_PATH)
            .map_err(|source| ConfigError::InvalidUrl {
                name: "VINLOOKUP_ORIGIN",
                value: origin.to_string(),
                source,
            })?;
        let recall_url = parse_url("VINLOOKUP_RECALL_URL", recall_url)?;
        Ok(Self {
            decode_url,
            recall_url,
        })
    }

    /// Create config from environment variables.
    ///
    /// Uses `VINLOOKUP_ORIGIN` and `VINLOOKUP_RECALL_URL`, falling back to
    /// the loopback defaults if not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let origin = env_or("VINLOOKUP_ORIGIN", DEFAULT_ORIGIN);
        let recall_url = env_or("VINLOOKUP_RECALL_URL", DEFAULT_RECALL_URL);
        Self::new(&origin, &recall_url)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        source,
    })
}
