//! Terminal styling and color utilities.
//!
//! ANSI escape codes for the cell states a search leaves behind, plus the
//! capability checks that decide whether to emit them.

use gridpath_lib::CellState;

/// ANSI escape codes for cell states and decorations.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Cell states
    /// Red for cells waiting in the frontier.
    pub const QUEUED: &str = "\x1b[31m";
    /// Green for expanded cells.
    pub const VISITED: &str = "\x1b[32m";
    /// Bold blue for cells on the found path.
    pub const PATH: &str = "\x1b[1;34m";
    /// Bold cyan for the start cell.
    pub const START: &str = "\x1b[1;36m";
    /// Gray for walls.
    pub const WALL: &str = "\x1b[90m";
    /// Bold yellow for the target cell.
    pub const TARGET: &str = "\x1b[1;33m";

    // Text
    /// Bright bold white for headlines.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text (footer, table rules).
    pub const GRAY: &str = "\x1b[90m";
    /// Orange (256-color) for the logo.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    /// Cyan for the logo border.
    pub const CYAN: &str = "\x1b[36m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub queued: &'static str,
    pub visited: &'static str,
    pub path: &'static str,
    pub start: &'static str,
    pub wall: &'static str,
    pub target: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            queued: colors::QUEUED,
            visited: colors::VISITED,
            path: colors::PATH,
            start: colors::START,
            wall: colors::WALL,
            target: colors::TARGET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            queued: "",
            visited: "",
            path: "",
            start: "",
            wall: "",
            target: "",
            white_bold: "",
            gray: "",
        }
    }

    /// `colored()` if the terminal supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Escape code for a cell state. Empty cells are never colored.
    #[must_use]
    pub fn for_state(&self, state: CellState) -> &'static str {
        match state {
            CellState::Empty => "",
            CellState::Queued => self.queued,
            CellState::Visited => self.visited,
            CellState::Path => self.path,
            CellState::Start => self.start,
            CellState::Wall => self.wall,
            CellState::Target => self.target,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Check if the terminal supports Unicode characters, based on the `LANG`
/// and `LC_ALL` locale hints.
#[must_use]
pub fn supports_unicode() -> bool {
    let utf_hint = |name: &str| {
        std::env::var(name)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    };
    if utf_hint("LANG") || utf_hint("LC_ALL") {
        return true;
    }
    // Windows terminals other than `TERM=dumb` handle Unicode.
    #[cfg(windows)]
    {
        std::env::var("TERM")
            .map(|term| !term.eq_ignore_ascii_case("dumb"))
            .unwrap_or(true)
    }
    #[cfg(not(windows))]
    {
        false
    }
}
