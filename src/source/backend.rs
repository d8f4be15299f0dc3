//! Country data source abstraction.
//!
//! Inside the plugin sandbox the network read is performed by the Zellij host:
//! the plugin describes the request, the host runs it, and the raw response
//! comes back later as an event. [`CountryDataSource`] therefore has two halves,
//! [`request`](CountryDataSource::request) and
//! [`complete`](CountryDataSource::complete), which together make up one
//! `fetch_all`.

use std::collections::BTreeMap;

use crate::domain::{CountryRecord, FetchError};

/// A single outbound `GET` the host should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Absolute URL of the catalog, including the field selection.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
}

/// Abstraction over country catalogs.
///
/// [`AppState`](crate::app::AppState) holds its source as a
/// `Box<dyn CountryDataSource>`, so a different catalog, or one returning
/// canned records, can be plugged in without touching the event handler.
///
/// # Implementations
///
/// - [`RestCountries`](crate::source::RestCountries): the public REST catalog (default)
///
/// # Examples
///
/// ```
/// use country_list::source::{CountryDataSource, RestCountries};
///
/// let source = RestCountries::default();
/// let request = source.request();
/// assert!(request.url.ends_with("fields=name,region,area"));
///
/// let countries = source.complete(200, br#"[{"name":"Tonga","region":"Oceania","area":747}]"#)?;
/// assert_eq!(countries[0].name, "Tonga");
/// # Ok::<(), country_list::domain::FetchError>(())
/// ```
pub trait CountryDataSource: std::fmt::Debug {
    /// Describes the read that fetches every country.
    fn request(&self) -> CatalogRequest;

    /// Turns the host's response into the record set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] for a non-success status and
    /// [`FetchError::Decode`] when the body is not a JSON array of countries.
    fn complete(&self, status: u16, body: &[u8]) -> Result<Vec<CountryRecord>, FetchError>;
}
