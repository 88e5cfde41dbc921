//! REST Countries v3.1 source.
//!
//! A single `GET {base_url}/all` with a `fields` filter; the upstream
//! rejects unfiltered `/all` requests.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::country::Country;
use crate::source::provider::parse_catalog;
use crate::source::{CatalogSource, SourceError};

/// Fields requested from the upstream, matching `core::country::Country`.
pub const FIELDS: &str = "name,cca2,cca3,flags,altSpellings,idd";

pub struct RestCountriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/all", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let url = self.endpoint();
        info!("Fetching country catalog from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("REST Countries API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        debug!("Received {} bytes", body.len());

        let countries = parse_catalog(&body)?;
        info!("Decoded {} countries", countries.len());
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source = RestCountriesSource::new("http://localhost:1234/v3.1/".into(), None).unwrap();
        assert_eq!(source.endpoint(), "http://localhost:1234/v3.1/all");
        assert_eq!(source.name(), "restcountries");
    }
}
