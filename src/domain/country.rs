//! Country domain model.
//!
//! This module defines [`CountryRecord`], one entry of the remote country
//! catalog. Records are decoded straight from the catalog's JSON payload and
//! are never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single country as delivered by the catalog.
///
/// # Fields
///
/// - `name`: Display name, also used as the row key in the table
/// - `region`: Continental region (e.g. `"Europe"`, `"Oceania"`)
/// - `area`: Surface area in square kilometres; `None` when the catalog omits
///   it or sends `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub area: Option<f64>,
}

impl CountryRecord {
    /// Creates a record with the given fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_list::domain::CountryRecord;
    ///
    /// let fiji = CountryRecord::new("Fiji", "Oceania", Some(18272.0));
    /// assert_eq!(fiji.name, "Fiji");
    /// assert!(fiji.is_smaller_than(65300.0));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, region: impl Into<String>, area: Option<f64>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            area,
        }
    }

    /// Returns `true` if the record has a known area strictly below `threshold`.
    ///
    /// Records without an area never compare as smaller.
    #[must_use]
    pub fn is_smaller_than(&self, threshold: f64) -> bool {
        self.area.is_some_and(|area| area < threshold)
    }

    /// Upper-cased name used as the alphabetical sort key.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.name.to_uppercase()
    }
}
