use std::fmt;

use async_trait::async_trait;

use crate::core::country::Country;

/// Errors that can occur while loading the catalog.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (bad URL, unusable client settings).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Upstream returned a non-success status.
    Api { status: u16, message: String },
    /// The payload was not a JSON array of countries.
    Parse(String),
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches the complete country collection.
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;
}

/// Decode a JSON array of countries.
pub(crate) fn parse_catalog(body: &[u8]) -> Result<Vec<Country>, SourceError> {
    serde_json::from_slice(body).map_err(|e| SourceError::Parse(e.to_string()))
}
