//! Table component renderer.
//!
//! Renders the derived view as a three-column table: NAME, REGION and a
//! right-aligned AREA. The selected row is painted across the full width.

use crate::app::state::{NAME_COLUMN_WIDTH, REGION_COLUMN_WIDTH};
use crate::ui::helpers::{char_len, pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column titles at `row` and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let area_width = cols.saturating_sub(NAME_COLUMN_WIDTH + REGION_COLUMN_WIDTH);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{}{:>area_width$}",
        pad_right("NAME", NAME_COLUMN_WIDTH),
        pad_right("REGION", REGION_COLUMN_WIDTH),
        "AREA (km²)"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every display item starting at `row`; returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one country.
///
/// # Layout
///
/// ```text
/// NAME (37 chars)                      REGION (14 chars)      AREA (right-aligned)
/// ```
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{}", pad_right(&item.name, NAME_COLUMN_WIDTH));
    print!("{}", pad_right(&item.region, REGION_COLUMN_WIDTH));

    let area_width = cols.saturating_sub(NAME_COLUMN_WIDTH + REGION_COLUMN_WIDTH);
    let area_padding = area_width.saturating_sub(char_len(&item.area));
    print!("{}", " ".repeat(area_padding));
    if item.area == "-" && !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.area);

    print!("{}", Theme::reset());
    row + 1
}
