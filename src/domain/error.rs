//! Error types for the country-list plugin.
//!
//! [`FetchError`] is the only failure the country catalog can produce. The
//! crate-wide [`CountryListError`] wraps it together with the I/O, theme and
//! configuration failures of the plugin shell, and [`Result`] is the matching
//! alias. All errors derive their `Error` impls with `thiserror`.

use thiserror::Error;

/// Failure of the single catalog read.
///
/// Produced at the data-source boundary; the view model logs it and keeps an
/// empty dataset. There is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The host reported a non-success HTTP status, or no response at all.
    ///
    /// Zellij reports transport failures with a status outside `200..300`.
    #[error("catalog request failed with status {status}")]
    Transport {
        /// HTTP status code as reported by the host.
        status: u16,
    },

    /// The response body was not a JSON array of country objects.
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The main error type for country-list operations.
///
/// # Examples
///
/// ```
/// use country_list::domain::{CountryListError, FetchError};
///
/// let err = CountryListError::from(FetchError::Transport { status: 503 });
/// assert_eq!(err.to_string(), "Fetch error: catalog request failed with status 503");
/// ```
#[derive(Debug, Error)]
pub enum CountryListError {
    /// Loading the country catalog failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for country-list operations.
pub type Result<T> = std::result::Result<T, CountryListError>;
