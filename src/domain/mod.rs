//! Domain layer for the country-list plugin.
//!
//! Core types and the pure filter/sort pipeline, independent of Zellij APIs
//! and of rendering.
//!
//! # Organization
//!
//! - [`country`]: The country record decoded from the catalog
//! - [`listing`]: Filter options, sort order and the derived-view pipeline
//! - [`error`]: Error types and result alias

pub mod country;
pub mod error;
pub mod listing;

pub use country::CountryRecord;
pub use error::{CountryListError, FetchError, Result};
pub use listing::{
    derive_view, reference_area, FilterKind, FilterOptions, ListCriteria, SortOrder,
    DEFAULT_REFERENCE_COUNTRY, DEFAULT_TARGET_REGION,
};
