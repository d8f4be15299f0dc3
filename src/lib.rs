//! Country List: a Zellij plugin that browses the world's countries.
//!
//! The plugin fetches a country catalog (name, region, area) once over HTTP
//! and shows it as a table that can be:
//! - Sorted alphabetically by name, ascending or descending, ignoring case
//! - Filtered to countries strictly smaller than a reference country
//! - Filtered to countries in a target region
//!
//! Both filters are independent toggles; with both on, a country must pass
//! both.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Country list view model                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │
//! │ (ui/)         │   │ (source/)     │
//! │ - Rendering   │   │ - Request     │
//! │ - Theming     │   │ - JSON decode │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Country record, filter/sort pipeline (domain/)   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans exported to an OTLP file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/country-list.wasm" {
//!         endpoint "https://restcountries.com/v2/all?fields=name,region,area"
//!         reference_country "Lithuania"
//!         target_region "Oceania"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse configuration, install tracing, build `AppState`,
//!    request `WebAccess` and subscribe to events.
//! 2. **Permission Granted**: the handler emits `Action::FetchCatalog`; the
//!    shim issues the `GET`.
//! 3. **Web Response**: the body is decoded and handed to the list view model
//!    exactly once. A failed fetch is logged and leaves the list empty.
//! 4. **Interaction**: `s` flips the sort, `1`/`2` flip the filters, and every
//!    change recomputes the derived view.
//!
//! # Example
//!
//! ```rust
//! use country_list::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsGranted)?;
//! handle_event(
//!     &mut state,
//!     &Event::CatalogResponse {
//!         status: 200,
//!         body: br#"[{"name":"Fiji","region":"Oceania","area":18272}]"#.to_vec(),
//!     },
//! )?;
//! assert_eq!(state.list.derived_view().len(), 1);
//! # Ok::<(), country_list::CountryListError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod source;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, CountryListViewModel, Event, LoadPhase};
pub use domain::{
    CountryListError, CountryRecord, FetchError, FilterKind, FilterOptions, ListCriteria, Result,
    SortOrder,
};
pub use source::{CountryDataSource, RestCountries};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/country-list.wasm" {
///     reference_country "New Zealand"
///     target_region "Europe"
///     theme_file "~/.config/country-list/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the country catalog. Default: [`source::DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Country whose area is the size-filter threshold. Matched exactly.
    /// Default: `"Lithuania"`
    pub reference_country: String,

    /// Region kept by the region filter. Default: `"Oceania"`
    pub target_region: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: source::DEFAULT_ENDPOINT.to_string(),
            reference_country: domain::DEFAULT_REFERENCE_COUNTRY.to_string(),
            target_region: domain::DEFAULT_TARGET_REGION.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing or blank values fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use country_list::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("reference_country".to_string(), "Fiji".to_string());
    /// map.insert("target_region".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.reference_country, "Fiji");
    /// assert_eq!(config.target_region, "Oceania");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        Self {
            endpoint: value("endpoint").unwrap_or(defaults.endpoint),
            reference_country: value("reference_country").unwrap_or(defaults.reference_country),
            target_region: value("target_region").unwrap_or(defaults.target_region),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Filter parameters derived from this configuration.
    #[must_use]
    pub fn criteria(&self) -> ListCriteria {
        ListCriteria {
            reference_name: self.reference_country.clone(),
            target_region: self.target_region.clone(),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// The theme comes from `theme_file` if set, else `theme_name`, else the
/// default; a theme that fails to load is logged and replaced by the default.
/// The list starts empty and waits for the catalog.
///
/// # Example
///
/// ```rust
/// use country_list::{initialize, Config, LoadPhase};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.phase, LoadPhase::Pending);
/// assert!(state.list.dataset().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing country-list plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.criteria(), RestCountries::new(config.endpoint.clone()), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn configuration_overrides_criteria() {
        let config = Config::from_zellij(&map(&[
            ("reference_country", "New Zealand"),
            ("target_region", "Europe"),
            ("endpoint", "http://localhost:8080/all"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(
            config.criteria(),
            ListCriteria {
                reference_name: "New Zealand".to_string(),
                target_region: "Europe".to_string(),
            }
        );
        assert_eq!(config.endpoint, "http://localhost:8080/all");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[("endpoint", ""), ("theme", " ")]));
        assert_eq!(config.endpoint, source::DEFAULT_ENDPOINT);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.source.request().url, source::DEFAULT_ENDPOINT);
    }

    #[test]
    fn initialize_prefers_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
