//! The country list view model.
//!
//! [`CountryListViewModel`] owns the dataset, the filter and sort settings and
//! the derived view. Every mutator rebuilds the derived view before returning,
//! so readers never observe a view that disagrees with the current settings.

use crate::domain::{
    derive_view, reference_area, CountryRecord, FetchError, FilterKind, FilterOptions,
    ListCriteria, SortOrder,
};

/// Dataset, configuration and derived view of the country table.
///
/// # Example
///
/// ```rust
/// use country_list::app::CountryListViewModel;
/// use country_list::domain::{CountryRecord, FilterKind, ListCriteria};
///
/// let mut list = CountryListViewModel::new(ListCriteria::default());
/// list.initialize(Ok(vec![
///     CountryRecord::new("Tonga", "Oceania", Some(747.0)),
///     CountryRecord::new("Lithuania", "Europe", Some(65300.0)),
/// ]))?;
///
/// list.toggle_filter(FilterKind::SmallerThanReference);
/// assert_eq!(list.derived_view().len(), 1);
/// # Ok::<(), country_list::domain::FetchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CountryListViewModel {
    criteria: ListCriteria,
    dataset: Vec<CountryRecord>,
    loaded: bool,
    filter_options: FilterOptions,
    sort_order: SortOrder,
    derived_view: Vec<CountryRecord>,
}

impl CountryListViewModel {
    /// Creates an empty view model with default filters and ascending order.
    #[must_use]
    pub fn new(criteria: ListCriteria) -> Self {
        Self {
            criteria,
            dataset: Vec::new(),
            loaded: false,
            filter_options: FilterOptions::default(),
            sort_order: SortOrder::default(),
            derived_view: Vec::new(),
        }
    }

    /// Applies the outcome of the catalog fetch.
    ///
    /// On success the dataset is set and the view rebuilt. On failure the
    /// error is logged, the dataset stays empty and the error is handed back
    /// for the caller's own logging. Once a dataset has been loaded, further
    /// outcomes are ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] it was given.
    pub fn initialize(
        &mut self,
        outcome: Result<Vec<CountryRecord>, FetchError>,
    ) -> Result<(), FetchError> {
        if self.loaded {
            tracing::debug!("dataset already loaded, ignoring catalog outcome");
            return Ok(());
        }

        match outcome {
            Ok(countries) => {
                tracing::debug!(count = countries.len(), "dataset loaded");
                self.dataset = countries;
                self.loaded = true;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load country catalog");
                Err(e)
            }
        }
    }

    /// Flips between ascending and descending order.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        tracing::debug!(sort_order = ?self.sort_order, "sort order toggled");
        self.recompute();
    }

    /// Flips the named filter.
    pub fn toggle_filter(&mut self, kind: FilterKind) {
        self.filter_options.toggle(kind);
        tracing::debug!(
            filter = ?kind,
            enabled = self.filter_options.is_enabled(kind),
            "filter toggled"
        );
        self.recompute();
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute",
            dataset = self.dataset.len(),
            filters = ?self.filter_options,
            sort_order = ?self.sort_order
        ).entered();

        self.derived_view = derive_view(
            &self.dataset,
            &self.filter_options,
            self.sort_order,
            &self.criteria,
        );

        tracing::debug!(visible = self.derived_view.len(), "derived view rebuilt");
    }

    /// The full, unfiltered dataset.
    #[must_use]
    pub fn dataset(&self) -> &[CountryRecord] {
        &self.dataset
    }

    /// The filtered and sorted view.
    #[must_use]
    pub fn derived_view(&self) -> &[CountryRecord] {
        &self.derived_view
    }

    #[must_use]
    pub const fn filter_options(&self) -> FilterOptions {
        self.filter_options
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn criteria(&self) -> &ListCriteria {
        &self.criteria
    }

    /// Area of the reference country, if it is in the dataset with a known area.
    #[must_use]
    pub fn reference_area(&self) -> Option<f64> {
        reference_area(&self.dataset, &self.criteria)
    }

    /// Whether a dataset has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}
