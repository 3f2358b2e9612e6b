//! Grid rendering.
//!
//! Writes a computed [`Layout`] row by row. Each name is styled according to
//! its [`EntryKind`] and padded to its column width plus the separator; the
//! last column of a row ends the line instead of being padded.

use crate::entry_kind::EntryKind;
use crate::entry_lister::Entry;
use crate::layout::Layout;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Terminates every name when colour output is on.
pub const RESET: &str = "\x1b[0m";

/// Writes entry grids with a fixed separator width.
pub struct GridRenderer {
    separator_width: usize,
    color: bool,
}

impl GridRenderer {
    /// Creates a renderer; colour follows `colored`'s terminal and env checks.
    pub fn new(separator_width: usize) -> Self {
        Self {
            separator_width,
            color: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Forces colour output on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Renders `entries` placed by `layout` into `out`.
    ///
    /// `kind_of` supplies the display attribute for each entry; it is only
    /// called for occupied cells. An empty layout writes nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use gridls::entry_kind::EntryKind;
    /// use gridls::entry_lister::Entry;
    /// use gridls::layout::Layout;
    /// use gridls::output::GridRenderer;
    ///
    /// let entries = vec![Entry::new("a"), Entry::new("bb")];
    /// let layout = Layout::for_entries(&entries, 80, 2);
    /// let mut out = Vec::new();
    /// GridRenderer::new(2)
    ///     .with_color(false)
    ///     .render(&mut out, &entries, &layout, |_| EntryKind::Plain)
    ///     .unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "a  bb\n");
    /// ```
    pub fn render<W, F>(
        &self,
        out: &mut W,
        entries: &[Entry],
        layout: &Layout,
        mut kind_of: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&Entry) -> EntryKind,
    {
        let widths = layout.column_widths();
        let last_col = layout.cols().saturating_sub(1);

        for row in 0..layout.rows() {
            for (col, &cell) in layout.row(row).unwrap_or(&[]).iter().enumerate() {
                let shown = match cell.map(|index| &entries[index]) {
                    Some(entry) => {
                        self.write_name(out, entry, kind_of(entry))?;
                        entry.display_len()
                    }
                    None => 0,
                };

                if col == last_col {
                    writeln!(out)?;
                } else {
                    let padding = widths[col].saturating_sub(shown) + self.separator_width;
                    write!(out, "{:padding$}", "")?;
                }
            }
        }
        Ok(())
    }

    fn write_name<W: Write>(&self, out: &mut W, entry: &Entry, kind: EntryKind) -> io::Result<()> {
        if !self.color {
            return write!(out, "{}", entry.name());
        }
        match kind {
            // Unstyled names still end with a reset, like styled ones.
            EntryKind::Plain => write!(out, "{}{}", entry.name(), RESET),
            _ => write!(out, "{}", styled(entry.name(), kind)),
        }
    }
}

/// Applies the style for `kind` to `name`.
pub fn styled(name: &str, kind: EntryKind) -> ColoredString {
    match kind {
        EntryKind::Directory => name.bold().blue(),
        EntryKind::SymbolicLink => name.bold().cyan(),
        EntryKind::Plain => name.normal(),
    }
}
