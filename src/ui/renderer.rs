//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use weatherdash::api::ApiClient;
//! use weatherdash::app::AppState;
//! use weatherdash::ui::{render, Theme};
//!
//! let state = AppState::new(ApiClient::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_dashboard(&viewmodel, &state.theme, cols, rows);
}
