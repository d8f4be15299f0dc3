//! Application state management and view model computation.
//!
//! [`AppState`] is the single owned instance the plugin shim creates at load
//! time and hands to the renderer. It wraps the [`CountryListViewModel`] with
//! the terminal concerns the list itself does not care about: the load phase,
//! the row cursor and the theme.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`], windowing
//! the derived view around the cursor so the selected row is always on screen.
//!
//! # Example
//!
//! ```rust
//! use country_list::app::AppState;
//! use country_list::domain::ListCriteria;
//! use country_list::source::RestCountries;
//! use country_list::ui::Theme;
//!
//! let state = AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::list::CountryListViewModel;
use super::modes::LoadPhase;
use crate::domain::{CountryRecord, FilterKind, ListCriteria, SortOrder};
use crate::source::CountryDataSource;
use crate::ui::helpers::{format_area, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FilterToggle, FooterInfo, HeaderInfo, UIViewModel,
};

/// Width of the NAME column, including the gap before REGION.
pub const NAME_COLUMN_WIDTH: usize = 37;

/// Width of the REGION column, including the gap before AREA.
pub const REGION_COLUMN_WIDTH: usize = 14;

/// Rows taken by chrome: blank, header, border, controls, column titles,
/// bottom border and footer.
const CHROME_ROWS: usize = 7;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Dataset, filters, sort order and derived view.
    pub list: CountryListViewModel,

    /// Catalog the one fetch goes to.
    pub source: Box<dyn CountryDataSource>,

    /// Progress of the catalog fetch.
    pub phase: LoadPhase,

    /// Zero-based cursor position within the derived view.
    ///
    /// Clamped after every recompute, wraps around during navigation.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state with an empty list and nothing requested yet.
    #[must_use]
    pub fn new(
        criteria: ListCriteria,
        source: impl CountryDataSource + 'static,
        theme: Theme,
    ) -> Self {
        Self {
            list: CountryListViewModel::new(criteria),
            source: Box::new(source),
            phase: LoadPhase::Pending,
            selected_index: 0,
            theme,
        }
    }

    /// Moves the cursor down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.list.derived_view().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.list.derived_view().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the cursor inside the derived view after it was rebuilt.
    pub fn clamp_selection(&mut self) {
        let len = self.list.derived_view().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// The country under the cursor, if any.
    #[must_use]
    pub fn selected_country(&self) -> Option<&CountryRecord> {
        self.list.derived_view().get(self.selected_index)
    }

    /// Computes a renderable UI view model for the given terminal size.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract chrome rows from the terminal height
    /// 2. Clamp the cursor to the view (the list may have been changed
    ///    without going through [`clamp_selection`](Self::clamp_selection))
    /// 3. Center the window on the cursor
    /// 4. Slide the window back when it would run past the end of the list
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let view = self.list.derived_view();

        let empty_state = self.compute_empty_state();
        if empty_state.is_some() {
            return UIViewModel {
                display_items: vec![],
                selected_index: 0,
                header: self.compute_header(),
                controls: self.compute_controls(),
                footer: Self::compute_footer(),
                empty_state,
            };
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let selected = self.selected_index.min(view.len() - 1);

        let mut visible_start = selected.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(view.len());
        if visible_end - visible_start < available_rows && view.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, country)| {
                Self::compute_display_item(country, visible_start + relative_idx == selected, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: selected - visible_start,
            header: self.compute_header(),
            controls: self.compute_controls(),
            footer: Self::compute_footer(),
            empty_state: None,
        }
    }

    fn compute_display_item(country: &CountryRecord, is_selected: bool, cols: usize) -> DisplayItem {
        let area_width = cols.saturating_sub(NAME_COLUMN_WIDTH + REGION_COLUMN_WIDTH).max(1);
        DisplayItem {
            name: truncate(&country.name, NAME_COLUMN_WIDTH - 2),
            region: truncate(&country.region, REGION_COLUMN_WIDTH - 2),
            area: truncate(&format_area(country.area), area_width),
            is_selected,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let visible = self.list.derived_view().len();
        let total = self.list.dataset().len();
        let title = if visible == total {
            format!(" Countries ({total}) ")
        } else {
            format!(" Countries ({visible} of {total}) ")
        };
        HeaderInfo { title }
    }

    fn compute_controls(&self) -> ControlsInfo {
        let criteria = self.list.criteria();
        let filters = self.list.filter_options();

        let sort_label = match self.list.sort_order() {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
        .to_string();

        ControlsInfo {
            sort_label,
            filters: vec![
                FilterToggle {
                    key: '1',
                    label: format!("Smaller than {}", criteria.reference_name),
                    active: filters.is_enabled(FilterKind::SmallerThanReference),
                },
                FilterToggle {
                    key: '2',
                    label: format!("In {}", criteria.target_region),
                    active: filters.is_enabled(FilterKind::InRegion),
                },
            ],
        }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "j/k or Ctrl+n/p: navigate  s: sort  1/2: toggle filters  q: quit".to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.list.derived_view().is_empty() {
            return None;
        }

        Some(if self.phase.is_loading() {
            EmptyState {
                message: "Loading countries…".to_string(),
                subtitle: "Waiting for the country catalog".to_string(),
            }
        } else {
            EmptyState {
                message: "No countries to show".to_string(),
                subtitle: "Toggle filters with 1 and 2".to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RestCountries;

    fn state_with(count: usize) -> AppState {
        let mut state = AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default());
        let countries = (0..count)
            .map(|i| CountryRecord::new(format!("Country {i:03}"), "Europe", Some(i as f64)))
            .collect();
        state.list.initialize(Ok(countries)).unwrap();
        state.phase = LoadPhase::Settled;
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_noop_on_empty_view() {
        let mut state = state_with(0);
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_country().is_none());
    }

    #[test]
    fn window_keeps_selection_visible() {
        let mut state = state_with(100);
        state.selected_index = 99;
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 24 - CHROME_ROWS);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items.last().map(|d| d.name.as_str()), Some("Country 099"));
    }

    #[test]
    fn stale_cursor_after_direct_toggle_is_clamped() {
        let mut countries: Vec<CountryRecord> = (0..100)
            .map(|i| CountryRecord::new(format!("Country {i:03}"), "Europe", Some(i as f64)))
            .collect();
        countries.push(CountryRecord::new("Tonga", "Oceania", Some(747.0)));
        let mut state = AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default());
        state.list.initialize(Ok(countries)).unwrap();
        state.phase = LoadPhase::Settled;

        state.selected_index = 99;
        state.list.toggle_filter(FilterKind::InRegion);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.selected_index, 0);
        assert_eq!(vm.display_items[0].name, "Tonga");
        assert!(vm.display_items[0].is_selected);
    }

    #[test]
    fn header_shows_visible_and_total() {
        let mut state = state_with(3);
        assert_eq!(state.compute_viewmodel(24, 80).header.title, " Countries (3) ");
        state.list.toggle_filter(FilterKind::InRegion);
        assert_eq!(state.compute_viewmodel(24, 80).header.title, " Countries (0 of 3) ");
    }

    #[test]
    fn empty_state_depends_on_phase() {
        let mut state = AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Loading countries…".to_string()));

        state.phase = LoadPhase::Settled;
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No countries to show".to_string()));
    }

    #[test]
    fn controls_offer_the_opposite_direction() {
        let mut state = state_with(1);
        assert_eq!(state.compute_viewmodel(24, 80).controls.sort_label, "Sort Descending");
        state.list.toggle_sort_order();
        assert_eq!(state.compute_viewmodel(24, 80).controls.sort_label, "Sort Ascending");
    }

    #[test]
    fn controls_name_the_criteria() {
        let state = state_with(1);
        let controls = state.compute_viewmodel(24, 80).controls;
        assert_eq!(controls.filters[0].label, "Smaller than Lithuania");
        assert_eq!(controls.filters[1].label, "In Oceania");
        assert!(controls.filters.iter().all(|f| !f.active));
    }
}
