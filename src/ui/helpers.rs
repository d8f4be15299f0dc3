//! Shared rendering utilities.
//!
//! Cursor positioning plus the text formatting the table needs. Country names
//! are frequently non-ASCII ("Åland Islands", "Côte d'Ivoire"), so all width
//! handling here counts characters, never bytes.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use country_list::ui::helpers::truncate;
///
/// assert_eq!(truncate("Åland Islands", 8), "Åland...");
/// assert_eq!(truncate("Fiji", 8), "Fiji");
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Pads `text` with spaces on the right to `width` characters.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let len = char_len(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Formats an area in square kilometres for the AREA column.
///
/// Whole numbers get thousands separators, fractions keep up to two decimals,
/// and an unknown area is shown as `-`.
///
/// # Example
///
/// ```rust
/// use country_list::ui::helpers::format_area;
///
/// assert_eq!(format_area(Some(65300.0)), "65,300");
/// assert_eq!(format_area(Some(0.44)), "0.44");
/// assert_eq!(format_area(None), "-");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_area(area: Option<f64>) -> String {
    let Some(area) = area else {
        return "-".to_string();
    };

    let rounded = (area.max(0.0) * 100.0).round() / 100.0;
    let whole = group_thousands(rounded.trunc() as u64);

    let fraction = format!("{:.2}", rounded.fract());
    let fraction = fraction
        .trim_start_matches('0')
        .trim_end_matches('0')
        .trim_end_matches('.');

    format!("{whole}{fraction}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_area(Some(17_124_442.0)), "17,124,442");
        assert_eq!(format_area(Some(747.0)), "747");
        assert_eq!(format_area(Some(0.0)), "0");
    }

    #[test]
    fn keeps_short_fractions() {
        assert_eq!(format_area(Some(747.5)), "747.5");
        assert_eq!(format_area(Some(2.02)), "2.02");
        assert_eq!(format_area(Some(1234.999)), "1,235");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Côte d'Ivoire", 13), "Côte d'Ivoire");
        assert_eq!(truncate("Côte d'Ivoire", 7), "Côte...");
        assert_eq!(truncate("Chad", 2), "Ch");
    }

    #[test]
    fn pad_right_uses_character_width() {
        assert_eq!(pad_right("Åland", 7), "Åland  ");
        assert_eq!(pad_right("Indonesia", 4), "Indonesia");
    }
}
