//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the weatherdash library and the
//! Zellij plugin system. It owns every host call: permission requests, event
//! subscription, `web_request` and `hide_self`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the grant mounts the dashboard
//! 3. **Update**: Translate Zellij events, delegate to the library, run actions
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::Mount`
//! - `PermissionRequestResult(Denied)` → `Event::PermissionDenied`
//! - `WebRequestResult` → `Event::ApiResponse` (only for our own requests)
//! - `Key` → navigation, search, sort and lookup events
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//! - `Ctrl+e`: Fetch the exact city named by the query
//!
//! In normal mode and while navigating search results:
//! - `j` / `k`: Move down / up
//! - `1`..`5`: Sort by City, Min, Max, Mean, Count
//! - `e`: Fetch exact
//! - `/`: Edit the search query
//! - `q`: Close plugin
//!
//! While typing a query:
//! - Any character: Append to the query and reload
//! - `Enter`: Focus the results
//! - `Esc`: Exit search and clear the query

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
zellij_tile::register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "weatherdash {} is a Zellij plugin; build it for wasm32-wasip1 and load the .wasm from a layout",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use weatherdash::api::RequestContext;
    use weatherdash::{handle_event, Action, Config, Event, InputMode, SearchFocus, SortKey};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: weatherdash::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: weatherdash::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, requests `WebAccess` and subscribes to events.
        ///
        /// Nothing is fetched until the permission result arrives.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            weatherdash::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(api_url = %config.api_url, "parsed configuration");
            self.app = weatherdash::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        /// Translates a Zellij event, delegates to `handle_event` and executes
        /// the resulting actions. Returns `true` if the UI should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    let Some(context) = RequestContext::from_map(&context) else {
                        tracing::debug!(status = status, "ignoring web request result without our context");
                        return false;
                    };
                    Event::ApiResponse {
                        context,
                        status,
                        body,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                    PermissionStatus::Granted => Event::Mount,
                    PermissionStatus::Denied => Event::PermissionDenied,
                },
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            weatherdash::ui::render(&self.app, rows, cols);
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

        /// Maps keyboard events to application events for the current mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    BareKey::Char('e') => Some(Event::FetchExact),
                    _ => None,
                };
            }

            match key.bare_key {
                BareKey::Down => return Some(Event::KeyDown),
                BareKey::Up => return Some(Event::KeyUp),
                _ => {}
            }

            match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Enter => Event::FocusResults,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                }),
                InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                    BareKey::Esc => Event::ExitSearch,
                    BareKey::Enter | BareKey::Char('e') => Event::FetchExact,
                    BareKey::Char('/') => Event::FocusSearchBar,
                    _ => return Self::map_table_key(key),
                }),
                InputMode::Normal => Some(match key.bare_key {
                    BareKey::Esc => Event::Escape,
                    BareKey::Char('e') => Event::FetchExact,
                    BareKey::Char('/') => Event::SearchMode,
                    _ => return Self::map_table_key(key),
                }),
            }
        }

        /// Keys shared by normal mode and result navigation.
        fn map_table_key(key: &KeyWithModifier) -> Option<Event> {
            match key.bare_key {
                BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Char(c) => SortKey::from_shortcut(c).map(Event::SortBy),
                _ => None,
            }
        }

        /// Translates library actions to Zellij API calls.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::Fetch(request) => {
                    tracing::debug!(url = %request.url, kind = request.context.kind.as_str(), "issuing request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        BTreeMap::new(),
                        vec![],
                        request.context.to_map(),
                    );
                }
            }
        }
    }
}
