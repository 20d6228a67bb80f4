//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! library never performs I/O itself: outbound HTTP calls and pane control are
//! described here and carried out by the Zellij shim in `main.rs`.
//!
//! # Example
//!
//! ```rust
//! use weatherdash::api::ApiClient;
//! use weatherdash::app::Action;
//!
//! let actions = vec![Action::Fetch(ApiClient::default().health_request())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues an HTTP GET.
    ///
    /// The result arrives later as an [`Event::ApiResponse`](crate::app::Event::ApiResponse)
    /// carrying the request's context.
    Fetch(ApiRequest),
}
