//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, permissions, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations go through [`AppState`] and its list view model
//! 4. Actions are collected and returned for the runtime to execute
//!
//! # Example
//!
//! ```rust
//! use country_list::app::{handle_event, Action, AppState, Event};
//! use country_list::domain::ListCriteria;
//! use country_list::source::RestCountries;
//! use country_list::ui::Theme;
//!
//! let mut state = AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchCatalog(_)));
//! # Ok::<(), country_list::domain::CountryListError>(())
//! ```

use super::modes::LoadPhase;
use crate::app::{Action, AppState};
use crate::domain::{FilterKind, Result};
use crate::source::CountryDataSource;

/// Events triggered by user input or by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the cursor up by one row (wraps to bottom).
    KeyUp,
    /// Flips the alphabetical direction.
    ToggleSort,
    /// Flips one of the two filters.
    ToggleFilter(FilterKind),
    /// Hides the plugin pane.
    CloseFocus,

    /// Network access was granted; the catalog may be requested.
    PermissionsGranted,
    /// Network access was refused; the list will stay empty.
    PermissionsDenied,

    /// The host finished the catalog request.
    CatalogResponse {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects
/// to run in order.
///
/// # Errors
///
/// Event handling itself is total; the `Result` keeps the runtime contract
/// uniform. A failed catalog fetch is logged and swallowed here, not returned.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ToggleSort => {
            state.list.toggle_sort_order();
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ToggleFilter(kind) => {
            state.list.toggle_filter(*kind);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsGranted => {
            if state.phase != LoadPhase::Pending {
                tracing::debug!(phase = ?state.phase, "catalog already requested");
                return Ok((false, vec![]));
            }

            let request = state.source.request();
            tracing::debug!(url = %request.url, "requesting country catalog");
            state.phase = LoadPhase::Fetching;
            Ok((false, vec![Action::FetchCatalog(request)]))
        }
        Event::PermissionsDenied => {
            tracing::warn!("network permission denied - country list stays empty");
            state.phase = LoadPhase::Settled;
            Ok((true, vec![]))
        }
        Event::CatalogResponse { status, body } => {
            if state.phase != LoadPhase::Fetching {
                tracing::debug!(status = status, phase = ?state.phase, "unexpected catalog response ignored");
                return Ok((false, vec![]));
            }

            let outcome = state.source.complete(*status, body);
            if let Err(e) = state.list.initialize(outcome) {
                tracing::debug!(error = %e, status = status, "catalog fetch failed, list left empty");
            }

            state.phase = LoadPhase::Settled;
            state.clamp_selection();
            Ok((true, vec![]))
        }
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::ToggleSort => "ToggleSort",
        Event::ToggleFilter(_) => "ToggleFilter",
        Event::CloseFocus => "CloseFocus",
        Event::PermissionsGranted => "PermissionsGranted",
        Event::PermissionsDenied => "PermissionsDenied",
        Event::CatalogResponse { .. } => "CatalogResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryRecord, FetchError, ListCriteria};
    use crate::source::{CatalogRequest, RestCountries};
    use crate::ui::Theme;
    use std::collections::BTreeMap;

    /// Source that ignores the body and answers with fixed records, or with
    /// a transport failure when `records` is `None`.
    #[derive(Debug)]
    struct CannedSource {
        records: Option<Vec<CountryRecord>>,
    }

    impl CountryDataSource for CannedSource {
        fn request(&self) -> CatalogRequest {
            CatalogRequest {
                url: "memory://countries".to_string(),
                headers: BTreeMap::new(),
            }
        }

        fn complete(&self, status: u16, _body: &[u8]) -> std::result::Result<Vec<CountryRecord>, FetchError> {
            self.records.clone().ok_or(FetchError::Transport { status })
        }
    }

    fn canned_state(records: Option<Vec<CountryRecord>>) -> AppState {
        AppState::new(ListCriteria::default(), CannedSource { records }, Theme::default())
    }

    fn new_state() -> AppState {
        AppState::new(ListCriteria::default(), RestCountries::default(), Theme::default())
    }

    const BODY: &[u8] = br#"[
        {"name":"Tonga","region":"Oceania","area":747},
        {"name":"Lithuania","region":"Europe","area":65300},
        {"name":"Fiji","region":"Oceania","area":18272}
    ]"#;

    #[test]
    fn permission_grant_requests_catalog_once() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(state.phase, LoadPhase::Fetching);

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn catalog_response_populates_list() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::CatalogResponse { status: 200, body: BODY.to_vec() },
        )
        .unwrap();

        assert!(render);
        assert_eq!(state.phase, LoadPhase::Settled);
        let names: Vec<&str> = state.list.derived_view().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Fiji", "Lithuania", "Tonga"]);
    }

    #[test]
    fn failed_response_settles_with_empty_list() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let result = handle_event(
            &mut state,
            &Event::CatalogResponse { status: 502, body: b"Bad Gateway".to_vec() },
        );

        assert!(result.is_ok());
        assert_eq!(state.phase, LoadPhase::Settled);
        assert!(state.list.dataset().is_empty());

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(actions.is_empty(), "no retry after failure");
    }

    #[test]
    fn filter_toggle_clamps_selection() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        handle_event(&mut state, &Event::CatalogResponse { status: 200, body: BODY.to_vec() }).unwrap();

        state.selected_index = 2;
        handle_event(&mut state, &Event::ToggleFilter(FilterKind::SmallerThanReference)).unwrap();
        let names: Vec<&str> = state.list.derived_view().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Fiji", "Tonga"]);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn response_before_request_is_ignored() {
        let mut state = new_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::CatalogResponse { status: 200, body: BODY.to_vec() },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.phase, LoadPhase::Pending);
        assert!(state.list.dataset().is_empty());

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert_eq!(actions.len(), 1, "fetch is still issued afterwards");
    }

    #[test]
    fn injected_source_drives_request_and_records() {
        let mut state = canned_state(Some(vec![
            CountryRecord::new("tonga", "Oceania", Some(747.0)),
            CountryRecord::new("Lithuania", "Europe", Some(65300.0)),
            CountryRecord::new("Fiji", "Oceania", Some(18272.0)),
        ]));

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let Action::FetchCatalog(request) = &actions[0] else {
            panic!("expected a catalog fetch, got {actions:?}");
        };
        assert_eq!(request.url, "memory://countries");

        handle_event(&mut state, &Event::CatalogResponse { status: 200, body: vec![] }).unwrap();
        handle_event(&mut state, &Event::ToggleFilter(FilterKind::InRegion)).unwrap();
        let names: Vec<&str> = state.list.derived_view().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Fiji", "tonga"]);
    }

    #[test]
    fn injected_source_failure_leaves_list_empty() {
        let mut state = canned_state(None);
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let result = handle_event(&mut state, &Event::CatalogResponse { status: 200, body: vec![] });

        assert!(result.is_ok());
        assert_eq!(state.phase, LoadPhase::Settled);
        assert!(!state.list.is_loaded());
        assert!(state.list.derived_view().is_empty());
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn denied_permission_settles() {
        let mut state = new_state();
        handle_event(&mut state, &Event::PermissionsDenied).unwrap();
        assert_eq!(state.phase, LoadPhase::Settled);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("No countries to show".to_string()));
    }
}
