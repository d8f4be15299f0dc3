//! REST catalog implementation of [`CountryDataSource`].
//!
//! Talks to the public `restcountries.com` v2 API, asking only for the three
//! fields the table shows. The response is decoded as-is; the catalog does no
//! filtering on our behalf.

use std::collections::BTreeMap;

use super::backend::{CatalogRequest, CountryDataSource};
use crate::domain::{CountryRecord, FetchError};

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v2/all?fields=name,region,area";

/// The REST country catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestCountries {
    endpoint: String,
}

impl RestCountries {
    /// Creates a source reading from `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CountryDataSource for RestCountries {
    fn request(&self) -> CatalogRequest {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        CatalogRequest {
            url: self.endpoint.clone(),
            headers,
        }
    }

    fn complete(&self, status: u16, body: &[u8]) -> Result<Vec<CountryRecord>, FetchError> {
        decode_catalog(status, body)
    }
}

/// Decodes a catalog response.
///
/// Any status outside `200..300` is a transport failure, whatever the body
/// says. A success body must be a JSON array of country objects.
///
/// # Errors
///
/// See [`CountryDataSource::complete`].
pub fn decode_catalog(status: u16, body: &[u8]) -> Result<Vec<CountryRecord>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Transport { status });
    }

    let countries: Vec<CountryRecord> = serde_json::from_slice(body)?;
    tracing::debug!(count = countries.len(), "catalog decoded");
    Ok(countries)
}
