//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! permission results and HTTP responses, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `PermissionDenied`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Commands**: `SortBy`, `FetchExact`, `CloseFocus`
//! - **Network**: `ApiResponse` carrying the originating request's context
//!
//! # Example
//!
//! ```rust
//! use weatherdash::api::ApiClient;
//! use weatherdash::app::{handle_event, AppState, Event};
//! use weatherdash::Theme;
//!
//! let mut state = AppState::new(ApiClient::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert_eq!(actions.len(), 2); // health probe + city list
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::pipeline::{self, LoadStep};
use crate::api::{ApiClient, RequestContext, RequestKind};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{HealthStatus, SortKey};

/// Error shown when the user refuses the web access permission.
pub const PERMISSION_DENIED_MESSAGE: &str = "web access permission denied";

/// Events triggered by user input, permission changes or HTTP results.
///
/// Events are processed sequentially, one to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; probes health and loads the full city list.
    Mount,
    /// Web access was refused; nothing can be fetched.
    PermissionDenied,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Enters search mode with typing focus, keeping the current query.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results table (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Sorts the table by a column, toggling direction on repeat.
    SortBy(SortKey),
    /// Looks up the trimmed query on the single-city endpoint.
    FetchExact,

    /// Result of an HTTP request issued through [`Action::Fetch`].
    ApiResponse {
        context: RequestContext,
        status: u16,
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render along with the actions to run in
/// sequence.
///
/// # Errors
///
/// API failures never surface here; they become display state. The `Result`
/// is kept for the runtime's error path.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Mount => {
            if state.mounted {
                tracing::debug!("already mounted");
                return Ok((false, vec![]));
            }
            state.mounted = true;
            tracing::info!(api_url = %state.api.base_url(), "web access granted, loading");
            Ok((true, vec![Action::Fetch(state.api.health_request()), state.begin_load()]))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access permission denied");
            state.apply_health(Ok(HealthStatus::unhealthy(PERMISSION_DENIED_MESSAGE)));
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!(query = %state.search_query, "focusing search input");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            let had_query = !state.search_query.is_empty();
            state.input_mode = InputMode::Normal;
            state.search_query.clear();

            if had_query {
                Ok((true, load_if_mounted(state)))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");

            Ok((true, load_if_mounted(state)))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, load_if_mounted(state)))
        }
        Event::SortBy(key) => {
            state.sort_by(*key);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::FetchExact => {
            if !state.mounted {
                return Ok((false, vec![]));
            }
            state.begin_lookup().map_or_else(
                || {
                    tracing::debug!("fetch exact ignored for blank query");
                    Ok((false, vec![]))
                },
                |action| Ok((true, vec![action])),
            )
        }
        Event::ApiResponse {
            context,
            status,
            body,
        } => Ok(handle_response(state, context, *status, body)),
    }
}

/// Short event label for spans; keeps response bodies out of the trace file.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "mount",
        Event::PermissionDenied => "permission_denied",
        Event::KeyDown => "key_down",
        Event::KeyUp => "key_up",
        Event::CloseFocus => "close_focus",
        Event::SearchMode => "search_mode",
        Event::FocusSearchBar => "focus_search_bar",
        Event::FocusResults => "focus_results",
        Event::ExitSearch => "exit_search",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::Escape => "escape",
        Event::SortBy(_) => "sort_by",
        Event::FetchExact => "fetch_exact",
        Event::ApiResponse { .. } => "api_response",
    }
}

fn load_if_mounted(state: &mut AppState) -> Vec<Action> {
    if state.mounted {
        vec![state.begin_load()]
    } else {
        vec![]
    }
}

fn handle_response(
    state: &mut AppState,
    context: &RequestContext,
    status: u16,
    body: &[u8],
) -> (bool, Vec<Action>) {
    tracing::debug!(
        kind = context.kind.as_str(),
        seq = context.seq,
        status = status,
        body_len = body.len(),
        "response received"
    );

    if context.kind == RequestKind::Health {
        state.apply_health(ApiClient::decode_health(status, body));
        return (true, vec![]);
    }

    if !state.is_current_request(context.seq) {
        tracing::debug!(
            seq = context.seq,
            latest = state.latest_request_seq(),
            "discarding stale response"
        );
        return (false, vec![]);
    }

    match context.kind {
        RequestKind::Cities => {
            let decoded = ApiClient::decode_cities(status, body);
            match pipeline::resolve_listing(&context.subject, decoded) {
                LoadStep::Done(outcome) => {
                    state.apply_outcome(outcome);
                    (true, vec![])
                }
                LoadStep::Confirm { name, fallback } => {
                    let action = state.await_confirmation(context.seq, name, fallback);
                    (false, vec![action])
                }
            }
        }
        RequestKind::ConfirmExact => {
            let Some(pending) = state.take_confirmation(context.seq, &context.subject) else {
                tracing::debug!(city = %context.subject, "no confirmation pending");
                return (false, vec![]);
            };
            let outcome =
                pipeline::resolve_confirmation(pending, ApiClient::decode_city(status, body));
            state.apply_outcome(outcome);
            (true, vec![])
        }
        RequestKind::LookupExact => {
            let outcome =
                pipeline::resolve_lookup(&context.subject, ApiClient::decode_city(status, body));
            state.apply_outcome(outcome);
            (true, vec![])
        }
        RequestKind::Health => (false, vec![]),
    }
}
