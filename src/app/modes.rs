//! Input mode state types for the application.
//!
//! The dashboard operates in one of two primary input modes:
//! - **Normal**: navigation, sorting and commands
//! - **Search**: editing the search query, or navigating the filtered results
//!   with the query kept
//!
//! # Example
//!
//! ```rust
//! use weatherdash::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or drive the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the query; every edit reloads the city list.
    Typing,

    /// Keystrokes navigate and sort the filtered results; the query is kept.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the search bar is shown
/// with a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), 1-5 (sort),
    /// e (fetch exact), Esc (clear search), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
