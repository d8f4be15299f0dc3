//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the plugin's data directory.
///
/// `/host` points at the cwd of the last focused terminal (usually the home
/// directory), so this typically resolves to
/// `~/.local/share/zellij/country-list`. Trace files live here.
///
/// # Examples
///
/// ```
/// use country_list::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/country-list");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("country-list")
}

/// Expands tilde paths to their `/host` equivalents.
///
/// # Examples
///
/// ```
/// use country_list::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
