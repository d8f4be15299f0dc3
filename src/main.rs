//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `country_list` library and the Zellij
//! plugin system: it translates Zellij events into library events and
//! performs the returned actions through the host API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the catalog is fetched once granted
//! 3. **Update**: Handle keys and web responses, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `s`: Toggle sort direction
//! - `1`: Toggle the "smaller than reference" filter
//! - `2`: Toggle the region filter
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use country_list::app::{CATALOG_CONTEXT_KEY, CATALOG_CONTEXT_VALUE};
use country_list::{handle_event, Action, Config, Event, FilterKind};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: country_list::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: country_list::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds state, requests permissions and subscribes
    /// to events.
    ///
    /// Only `WebAccess` is requested; the catalog fetch waits for the
    /// `PermissionRequestResult` event.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        country_list::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            reference_country = %config.reference_country,
            target_region = %config.target_region,
            "parsed configuration"
        );
        self.app = country_list::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event` and runs the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_response(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in &actions {
                    Self::execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        country_list::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('s') => Event::ToggleSort,
            BareKey::Char('1') => Event::ToggleFilter(FilterKind::SmallerThanReference),
            BareKey::Char('2') => Event::ToggleFilter(FilterKind::InRegion),
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a web response to an event if it answers the catalog request.
    fn map_web_response(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(CATALOG_CONTEXT_KEY).map(String::as_str) != Some(CATALOG_CONTEXT_VALUE) {
            tracing::debug!(status = status, "ignoring unrelated web response");
            return None;
        }

        tracing::debug!(status = status, body_len = body.len(), "catalog response received");
        Some(Event::CatalogResponse { status, body })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCatalog(request) => {
                tracing::debug!(url = %request.url, "issuing catalog request");
                let context = BTreeMap::from([(
                    CATALOG_CONTEXT_KEY.to_string(),
                    CATALOG_CONTEXT_VALUE.to_string(),
                )]);
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    context,
                );
            }
        }
    }
}
