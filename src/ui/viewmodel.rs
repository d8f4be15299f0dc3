//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only, no business logic.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window of the country table.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (title and counts).
    pub header: HeaderInfo,

    /// Sort and filter control bar.
    pub controls: ControlsInfo,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Message shown instead of the table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// One row of the country table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Country name, truncated to the NAME column.
    pub name: String,

    /// Region, truncated to the REGION column.
    pub region: String,

    /// Formatted area, `-` when unknown.
    pub area: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, e.g. `" Countries (25 of 250) "`.
    pub title: String,
}

/// Control bar display information.
#[derive(Debug, Clone)]
pub struct ControlsInfo {
    /// Label of the sort button; names the direction pressing it switches to.
    pub sort_label: String,

    /// The filter toggles in display order.
    pub filters: Vec<FilterToggle>,
}

/// A single filter toggle in the control bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterToggle {
    /// Key that flips this filter.
    pub key: char,

    /// Human-readable label.
    pub label: String,

    /// Whether the filter is on (rendered with a check mark).
    pub active: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
