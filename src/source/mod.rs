//! Country catalog access.
//!
//! - `backend`: The [`CountryDataSource`] trait and the request description
//! - `rest`: The REST catalog implementation and response decoding

pub mod backend;
pub mod rest;

pub use backend::{CatalogRequest, CountryDataSource};
pub use rest::{decode_catalog, RestCountries, DEFAULT_ENDPOINT};
