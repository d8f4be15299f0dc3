//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts
//! - [`controls`]: Sort button and filter toggles
//! - [`table`]: Country table (NAME, REGION, AREA)
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown in place of an empty table

mod controls;
mod empty;
mod footer;
mod header;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use controls::render_controls;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Controls]
/// [Table Headers]          or   [Empty state message]
/// [Table Rows]
/// [Blank padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_controls(current_row, &vm.controls, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1).max(1);
    let border_row = footer_start.saturating_sub(1).max(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
