//! Column layout optimizer.
//!
//! Chooses the number of columns, the number of rows and each column's width
//! so that a list of names occupies as few rows as possible without the grid
//! exceeding the terminal width.
//!
//! Names are filled column-major: the first column receives items
//! `[0, r)`, the second `[r, 2r)` and so on. Every column count from 1 to
//! `n` is tried; the first one reaching the smallest row count wins, so ties
//! go to the smallest column count. One name per row is always available as
//! a fallback, even when a single name is wider than the terminal.
//!
//! # Examples
//!
//! ```
//! use gridls::layout::Layout;
//!
//! // "a" "bb" "ccc" "d" fit on a single row of an 80 column terminal.
//! let layout = Layout::compute(&[1, 2, 3, 1], 80, 2);
//! assert_eq!((layout.cols(), layout.rows()), (4, 1));
//! assert_eq!(layout.column_widths(), &[1, 2, 3, 1]);
//! ```

use crate::entry_lister::Entry;

/// One column count evaluated during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCandidate {
    pub cols: usize,
    pub rows: usize,
    /// Sum of the column widths, separators excluded.
    pub table_width: usize,
}

impl LayoutCandidate {
    /// Evaluates `cols` columns over `lengths`, filled column-major.
    ///
    /// `cols` must be in `1..=lengths.len()`.
    pub fn evaluate(lengths: &[usize], cols: usize) -> Self {
        let rows = lengths.len().div_ceil(cols);
        let table_width = column_widths(lengths, rows, cols).iter().sum();
        Self {
            cols,
            rows,
            table_width,
        }
    }

    /// Width of a rendered row including the separators between columns.
    pub fn total_width(&self, separator_width: usize) -> usize {
        self.table_width
            .saturating_add(self.cols.saturating_sub(1).saturating_mul(separator_width))
    }

    /// Returns true if the candidate's rows fit in `terminal_width`.
    pub fn fits(&self, terminal_width: usize, separator_width: usize) -> bool {
        self.total_width(separator_width) <= terminal_width
    }
}

/// Widest entry in each of `cols` column-major columns of height `rows`.
///
/// Columns left without entries have width 0.
fn column_widths(lengths: &[usize], rows: usize, cols: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = lengths
        .chunks(rows.max(1))
        .map(|column| column.iter().copied().max().unwrap_or(0))
        .collect();
    widths.resize(cols, 0);
    widths
}

/// A grid assignment of entries to cells.
///
/// Cells are stored row-major in one flat vector; each holds the index of an
/// entry in the input sequence or `None` for the unused tail of the last
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    rows: usize,
    cols: usize,
    column_widths: Vec<usize>,
    cells: Vec<Option<usize>>,
}

impl Layout {
    /// Computes the layout for names of the given display lengths.
    pub fn compute(lengths: &[usize], terminal_width: usize, separator_width: usize) -> Self {
        let n = lengths.len();
        if n == 0 {
            return Self::default();
        }

        // One name per row is accepted unconditionally, overflow included.
        let mut best_cols = 1;
        let mut best_rows = n;
        for cols in 1..=n {
            let candidate = LayoutCandidate::evaluate(lengths, cols);
            if candidate.rows < best_rows && candidate.fits(terminal_width, separator_width) {
                best_cols = candidate.cols;
                best_rows = candidate.rows;
            }
        }

        Self::with_shape(lengths, best_rows, best_cols)
    }

    /// Computes the layout for a listed entry sequence.
    pub fn for_entries(entries: &[Entry], terminal_width: usize, separator_width: usize) -> Self {
        let lengths: Vec<usize> = entries.iter().map(Entry::display_len).collect();
        Self::compute(&lengths, terminal_width, separator_width)
    }

    fn with_shape(lengths: &[usize], rows: usize, cols: usize) -> Self {
        let mut cells = vec![None; rows * cols];
        for index in 0..lengths.len() {
            let (row, col) = (index % rows, index / rows);
            cells[row * cols + col] = Some(index);
        }
        Self {
            rows,
            cols,
            column_widths: column_widths(lengths, rows, cols),
            cells,
        }
    }

    /// Number of rows; 0 only for an empty input.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, each holding at least one entry.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Width of each column: its longest name.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Returns true when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Index of the entry at `(row, col)`, or `None` for an empty or
    /// out-of-range cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// The cells of one row, left to right, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Option<usize>]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Width of a full row: column widths plus separators.
    pub fn total_width(&self, separator_width: usize) -> usize {
        let separators = self.cols.saturating_sub(1) * separator_width;
        self.column_widths.iter().sum::<usize>() + separators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lens(names: &[&str]) -> Vec<usize> {
        names.iter().map(|name| name.chars().count()).collect()
    }

    #[test]
    fn test_empty_input() {
        let layout = Layout::compute(&[], 80, 2);
        assert_eq!(layout.rows(), 0);
        assert_eq!(layout.cols(), 0);
        assert!(layout.column_widths().is_empty());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_entry() {
        let layout = Layout::compute(&[5], 80, 2);
        assert_eq!((layout.cols(), layout.rows()), (1, 1));
        assert_eq!(layout.column_widths(), &[5]);
        assert_eq!(layout.cell(0, 0), Some(0));
    }

    #[test]
    fn test_everything_on_one_row() {
        let layout = Layout::compute(&lens(&["a", "bb", "ccc", "d"]), 80, 2);
        assert_eq!((layout.cols(), layout.rows()), (4, 1));
        assert_eq!(layout.total_width(2), 13);
    }

    #[test]
    fn test_narrow_terminal_falls_back_to_one_per_row() {
        let layout = Layout::compute(&lens(&["alpha", "beta"]), 3, 2);
        assert_eq!((layout.cols(), layout.rows()), (1, 2));
        assert_eq!(layout.column_widths(), &[5]);
        assert_eq!(layout.cell(0, 0), Some(0));
        assert_eq!(layout.cell(1, 0), Some(1));
    }

    #[test]
    fn test_column_major_fill() {
        // Width 5 admits two columns of three rows but not three columns.
        let layout = Layout::compute(&lens(&["a", "b", "c", "d", "e"]), 5, 2);
        assert_eq!((layout.cols(), layout.rows()), (2, 3));
        assert_eq!(layout.cell(0, 0), Some(0));
        assert_eq!(layout.cell(1, 0), Some(1));
        assert_eq!(layout.cell(2, 0), Some(2));
        assert_eq!(layout.cell(0, 1), Some(3));
        assert_eq!(layout.cell(1, 1), Some(4));
        assert_eq!(layout.cell(2, 1), None);
        assert_eq!(layout.row(0), Some(&[Some(0), Some(3)][..]));
        assert_eq!(layout.row(2), Some(&[Some(2), None][..]));
    }

    #[test]
    fn test_exact_fit_is_feasible() {
        // 3 + 3 + 2 = 8 columns exactly.
        let layout = Layout::compute(&[3, 3], 8, 2);
        assert_eq!((layout.cols(), layout.rows()), (2, 1));

        let layout = Layout::compute(&[3, 3], 7, 2);
        assert_eq!((layout.cols(), layout.rows()), (1, 2));
    }

    #[test]
    fn test_tie_goes_to_fewest_columns() {
        // Five names: 3 and 4 columns both need 2 rows; 3 columns must win.
        let layout = Layout::compute(&[1; 5], 10, 2);
        assert_eq!((layout.cols(), layout.rows()), (3, 2));
        assert_eq!(layout.column_widths(), &[1, 1, 1]);
    }

    #[test]
    fn test_column_widths_follow_longest_name() {
        let names = ["a", "long-name", "b", "c", "mid", "d"];
        let layout = Layout::compute(&lens(&names), 20, 2);
        assert_eq!((layout.cols(), layout.rows()), (3, 2));
        assert_eq!(layout.column_widths(), &[9, 1, 3]);
        assert!(layout.total_width(2) <= 20);
    }

    #[test]
    fn test_zero_separator() {
        let layout = Layout::compute(&[2, 2, 2], 6, 0);
        assert_eq!((layout.cols(), layout.rows()), (3, 1));
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let layout = Layout::compute(&[1, 1], 80, 2);
        assert_eq!(layout.cell(5, 0), None);
        assert_eq!(layout.cell(0, 5), None);
        assert_eq!(layout.row(5), None);
        assert_eq!(Layout::default().row(0), None);
    }

    #[test]
    fn test_for_entries_uses_character_count() {
        let entries = vec![Entry::new("über"), Entry::new("naïve")];
        // Byte lengths of 5 and 6 would need 13 columns.
        let layout = Layout::for_entries(&entries, 11, 2);
        assert_eq!((layout.cols(), layout.rows()), (2, 1));
        assert_eq!(layout.column_widths(), &[4, 5]);
    }

    #[test]
    fn test_candidate_evaluation() {
        let candidate = LayoutCandidate::evaluate(&[1, 4, 2, 2, 7], 2);
        assert_eq!(candidate.rows, 3);
        assert_eq!(candidate.table_width, 4 + 7);
        assert_eq!(candidate.total_width(2), 13);
        assert!(candidate.fits(13, 2));
        assert!(!candidate.fits(12, 2));
    }

    proptest! {
        #[test]
        fn prop_every_entry_placed_once(
            lengths in prop::collection::vec(1usize..30, 0..60),
            width in 1usize..200,
            sep in 0usize..4,
        ) {
            let layout = Layout::compute(&lengths, width, sep);
            let mut seen = vec![0usize; lengths.len()];
            for row in 0..layout.rows() {
                for col in 0..layout.cols() {
                    if let Some(index) = layout.cell(row, col) {
                        seen[index] += 1;
                    }
                }
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
        }

        #[test]
        fn prop_no_feasible_candidate_has_fewer_rows(
            lengths in prop::collection::vec(1usize..30, 1..60),
            width in 1usize..200,
            sep in 0usize..4,
        ) {
            let layout = Layout::compute(&lengths, width, sep);
            for cols in 1..=lengths.len() {
                let candidate = LayoutCandidate::evaluate(&lengths, cols);
                if candidate.fits(width, sep) {
                    prop_assert!(candidate.rows >= layout.rows());
                    if cols < layout.cols() {
                        prop_assert!(candidate.rows > layout.rows());
                    }
                }
            }
        }

        #[test]
        fn prop_multi_column_layout_fits(
            lengths in prop::collection::vec(1usize..30, 1..60),
            width in 1usize..200,
            sep in 0usize..4,
        ) {
            let layout = Layout::compute(&lengths, width, sep);
            if layout.cols() > 1 {
                prop_assert!(layout.total_width(sep) <= width);
            }
            prop_assert_eq!(layout.column_widths().len(), layout.cols());
        }

        #[test]
        fn prop_compute_is_deterministic(
            lengths in prop::collection::vec(0usize..30, 0..40),
            width in 1usize..120,
        ) {
            prop_assert_eq!(
                Layout::compute(&lengths, width, 2),
                Layout::compute(&lengths, width, 2)
            );
        }
    }
}
