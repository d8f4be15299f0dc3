//! Control bar component renderer.
//!
//! One line holding the sort button and the filter toggles, each prefixed by
//! the key that triggers it:
//!
//! ```text
//!  [s] Sort Descending   [1] ✔ Smaller than Lithuania   [2]   In Oceania
//! ```

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlsInfo;

const CHECK_MARK: &str = "✔";

/// Renders the control bar at `row` and returns the next free row.
pub fn render_controls(row: usize, controls: &ControlsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let sort = format!(" [s] {}", controls.sort_label);
    print!("{}", Theme::fg(&theme.colors.control_fg));
    print!("{sort}");
    let mut written = char_len(&sort);

    for toggle in &controls.filters {
        let mark = if toggle.active { CHECK_MARK } else { " " };
        let text = format!("   [{}] {mark} {}", toggle.key, toggle.label);

        if toggle.active {
            print!("{}", Theme::fg(&theme.colors.control_active_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.control_fg));
        }
        print!("{text}");
        written += char_len(&text);
    }

    print!("{}", " ".repeat(cols.saturating_sub(written)));
    print!("{}", Theme::reset());
    row + 1
}
