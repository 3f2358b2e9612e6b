//! Listing configuration.
//!
//! All behavioural switches are carried in a [`ListingConfig`] that is passed
//! explicitly to the lister, the layout optimizer and the renderer. There is
//! no process-wide state and no configuration file; values come from the
//! command line or from [`ListingConfig::default`].
//!
//! # Terminal width
//!
//! The width used for layout is resolved in this order:
//! 1. an explicit override (`--width`)
//! 2. the size of the terminal attached to stdout
//! 3. [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a terminal

use std::io::IsTerminal;
use terminal_size::{Width, terminal_size_of};

/// Width assumed when stdout is redirected or its size cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Number of blank columns between adjacent grid columns by default.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 2;

/// Behavioural flags for a single listing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Include entries whose name starts with `.`.
    pub show_all: bool,
    /// Blank characters inserted between adjacent columns.
    pub separator_width: usize,
    /// Explicit terminal width; `None` queries the terminal.
    pub terminal_width: Option<usize>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_all: false,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            terminal_width: None,
        }
    }
}

/// Where the resolved terminal width came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSource {
    /// Supplied by the caller.
    Override,
    /// Queried from the terminal attached to stdout.
    Terminal,
    /// Stdout is not a terminal; [`DEFAULT_TERMINAL_WIDTH`] was used.
    Fallback,
}

impl ListingConfig {
    /// Resolves the width the layout must fit in, together with its source.
    pub fn resolve_terminal_width(&self) -> (usize, WidthSource) {
        resolve_width(self.terminal_width, detect_stdout_width())
    }
}

fn resolve_width(explicit: Option<usize>, detected: Option<usize>) -> (usize, WidthSource) {
    match (explicit, detected) {
        (Some(width), _) => (width, WidthSource::Override),
        (None, Some(width)) if width > 0 => (width, WidthSource::Terminal),
        _ => (DEFAULT_TERMINAL_WIDTH, WidthSource::Fallback),
    }
}

/// Queries the column count of the terminal attached to stdout.
///
/// Returns `None` when stdout is redirected to a file or pipe.
pub fn detect_stdout_width() -> Option<usize> {
    let stdout = std::io::stdout();
    if !stdout.is_terminal() {
        return None;
    }
    terminal_size_of(stdout).map(|(Width(w), _)| w as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListingConfig::default();
        assert!(!config.show_all);
        assert_eq!(config.separator_width, 2);
        assert_eq!(config.terminal_width, None);
    }

    #[test]
    fn test_override_wins_over_terminal() {
        assert_eq!(
            resolve_width(Some(40), Some(120)),
            (40, WidthSource::Override)
        );
    }

    #[test]
    fn test_terminal_width_used_without_override() {
        assert_eq!(resolve_width(None, Some(132)), (132, WidthSource::Terminal));
    }

    #[test]
    fn test_fallback_when_not_a_terminal() {
        assert_eq!(
            resolve_width(None, None),
            (DEFAULT_TERMINAL_WIDTH, WidthSource::Fallback)
        );
        // Some emulators report a zero-sized window before first draw.
        assert_eq!(
            resolve_width(None, Some(0)),
            (DEFAULT_TERMINAL_WIDTH, WidthSource::Fallback)
        );
    }
}
