//! Weatherdash: a Zellij plugin dashboard for per-city temperature statistics.
//!
//! Weatherdash talks to a small REST backend and shows:
//! - A backend health line, probed once when web access is granted
//! - A sortable table of cities with min/max/mean temperature and sample count
//! - Live search: every keystroke reloads the filtered list
//! - Exact-match confirmation against the authoritative single-city endpoint

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Two-step load pipeline                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ API Layer     │
//! │ (ui/)         │                     │ (api/)        │
//! │ - Rendering   │                     │ - Requests    │
//! │ - Theming     │                     │ - Decoding    │
//! │ - Components  │                     │ - Routing ctx │
//! └───────────────┘                     └───────────────┘
//!         │                                      │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Errors, city stats, health, sorting (domain/)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never performs I/O on its own. HTTP calls are returned as
//! [`Action::Fetch`] and executed by the shim through Zellij's `web_request`;
//! results come back as [`Event::ApiResponse`].
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/weatherdash.wasm" {
//!         api_url "http://127.0.0.1:5000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use weatherdash::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Mount)?;
//!
//! for action in &actions {
//!     if let Action::Fetch(request) = action {
//!         println!("GET {}", request.url);
//!     }
//! }
//! # Ok::<(), weatherdash::WeatherdashError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{CityMap, CityStats, HealthStatus, Result, SortConfig, SortKey, WeatherdashError};
pub use ui::Theme;

use api::{ApiClient, DEFAULT_API_URL};
use std::collections::BTreeMap;

/// Default `EnvFilter` directive when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from the Zellij plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/weatherdash.wasm" {
///     api_url "http://weather.internal:5000"
///     theme_file "~/.config/weatherdash/theme.toml"
///     trace_level "weatherdash=debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL. Default: `http://127.0.0.1:5000`
    pub api_url: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values fall back to their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use weatherdash::Config;
    ///
    /// let map = BTreeMap::from([("api_url".to_string(), "http://10.0.0.5:8080/".to_string())]);
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_url, "http://10.0.0.5:8080/");
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            api_url: value("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or_else(|| DEFAULT_TRACE_LEVEL.to_string()),
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Failures are logged and fall through to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the initial application state for `config`.
///
/// Nothing is fetched yet: loading starts with [`Event::Mount`], once web
/// access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_url = %config.api_url, "initializing weatherdash plugin");
    AppState::new(ApiClient::new(config.api_url.clone()), config.load_theme())
}
