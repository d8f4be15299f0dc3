//! Filter and sort configuration, and the pipeline that applies them.
//!
//! The derived view shown in the table is a pure function of the dataset, the
//! [`FilterOptions`], the [`SortOrder`] and the fixed [`ListCriteria`]. It is
//! rebuilt from scratch by [`derive_view`] whenever any of those change.
//!
//! # Pipeline
//!
//! ```text
//! dataset → size filter → region filter → case-insensitive name sort → view
//! ```

use super::country::CountryRecord;

/// Default reference country for the size filter.
pub const DEFAULT_REFERENCE_COUNTRY: &str = "Lithuania";

/// Default region for the region filter.
pub const DEFAULT_TARGET_REGION: &str = "Oceania";

/// Names one of the two boolean filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Keep countries with an area strictly smaller than the reference country.
    SmallerThanReference,
    /// Keep countries located in the target region.
    InRegion,
}

/// The two boolean filters. Always fully defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub smaller_than_reference: bool,
    pub in_region: bool,
}

impl FilterOptions {
    /// Flips the named filter.
    pub fn toggle(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::SmallerThanReference => {
                self.smaller_than_reference = !self.smaller_than_reference;
            }
            FilterKind::InRegion => self.in_region = !self.in_region,
        }
    }

    /// Returns whether the named filter is switched on.
    #[must_use]
    pub const fn is_enabled(&self, kind: FilterKind) -> bool {
        match kind {
            FilterKind::SmallerThanReference => self.smaller_than_reference,
            FilterKind::InRegion => self.in_region,
        }
    }
}

/// Alphabetical direction of the country list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Fixed parameters of the filter pipeline.
///
/// Set once from configuration; the defaults reproduce the classic
/// "smaller than Lithuania" and "in Oceania" filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCriteria {
    /// Name of the country whose area is the size-filter threshold.
    pub reference_name: String,
    /// Region the region filter keeps.
    pub target_region: String,
}

impl Default for ListCriteria {
    fn default() -> Self {
        Self {
            reference_name: DEFAULT_REFERENCE_COUNTRY.to_string(),
            target_region: DEFAULT_TARGET_REGION.to_string(),
        }
    }
}

/// Looks up the reference country's area.
///
/// Returns `None` if the dataset has no record with exactly the reference name,
/// or if that record has no area. In both cases the size filter has no effect.
#[must_use]
pub fn reference_area(dataset: &[CountryRecord], criteria: &ListCriteria) -> Option<f64> {
    dataset
        .iter()
        .find(|country| country.name == criteria.reference_name)
        .and_then(|country| country.area)
}

/// Builds the filtered and sorted view of `dataset`.
///
/// The size filter only applies when [`reference_area`] resolves. Records
/// without an area are dropped by an active size filter. Sorting is stable, so
/// names that are equal ignoring case keep their dataset order in both
/// directions.
///
/// # Examples
///
/// ```
/// use country_list::domain::{derive_view, CountryRecord, FilterOptions, ListCriteria, SortOrder};
///
/// let dataset = vec![
///     CountryRecord::new("Tonga", "Oceania", Some(747.0)),
///     CountryRecord::new("Fiji", "Oceania", Some(18272.0)),
///     CountryRecord::new("Lithuania", "Europe", Some(65300.0)),
/// ];
/// let filters = FilterOptions { smaller_than_reference: false, in_region: true };
///
/// let view = derive_view(&dataset, &filters, SortOrder::Descending, &ListCriteria::default());
/// let names: Vec<&str> = view.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Tonga", "Fiji"]);
/// ```
#[must_use]
pub fn derive_view(
    dataset: &[CountryRecord],
    filters: &FilterOptions,
    order: SortOrder,
    criteria: &ListCriteria,
) -> Vec<CountryRecord> {
    let threshold = if filters.smaller_than_reference {
        reference_area(dataset, criteria)
    } else {
        None
    };

    if filters.smaller_than_reference && threshold.is_none() {
        tracing::debug!(
            reference = %criteria.reference_name,
            "reference country unresolved, size filter skipped"
        );
    }

    let mut view: Vec<CountryRecord> = dataset
        .iter()
        .filter(|country| threshold.map_or(true, |limit| country.is_smaller_than(limit)))
        .filter(|country| !filters.in_region || country.region == criteria.target_region)
        .cloned()
        .collect();

    match order {
        SortOrder::Ascending => view.sort_by_cached_key(CountryRecord::sort_key),
        SortOrder::Descending => view.sort_by_cached_key(|country| std::cmp::Reverse(country.sort_key())),
    }

    view
}
