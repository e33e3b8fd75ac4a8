//! Row/column tiling of grouped controls.

use serde::{Deserialize, Serialize};

/// Striping of rows and cells. Counting is 1-based, so the first row and the
/// first cell of every row are odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    fn of_zero_based(index: usize) -> Self {
        if index % 2 == 0 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Holds the option at this index.
    Item(usize),
    /// Padding past the last option; keeps the table rectangular.
    Placeholder,
}

/// Row-major grid for `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub len: usize,
    pub rows: usize,
    pub columns: usize,
}

impl GridLayout {
    /// Lay out `len` items in `columns` columns. Non-positive column counts
    /// fall back to a single column and counts above `len` are clamped to it.
    /// Returns `None` when there is nothing to lay out.
    pub fn new(len: usize, columns: i64) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let columns = match usize::try_from(columns) {
            Ok(0) | Err(_) => 1,
            Ok(c) => c.min(len),
        };
        Some(Self {
            len,
            rows: len.div_ceil(columns),
            columns,
        })
    }

    /// Zero-based `(row, column)` of item `index`.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.len).then_some((index / self.columns, index % self.columns))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        let index = row * self.columns + column;
        Some(if index < self.len {
            Cell::Item(index)
        } else {
            Cell::Placeholder
        })
    }

    pub fn row_parity(&self, row: usize) -> Parity {
        Parity::of_zero_based(row)
    }

    pub fn cell_parity(&self, column: usize) -> Parity {
        Parity::of_zero_based(column)
    }

    /// Cells of each row, in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.rows).map(move |row| {
            (0..self.columns)
                .filter_map(|column| self.cell(row, column))
                .collect()
        })
    }

    pub fn placeholders(&self) -> usize {
        self.rows * self.columns - self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_in_three_columns() {
        let grid = GridLayout::new(7, 3).unwrap();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.position(5), Some((1, 2)));
        assert_eq!(grid.position(7), None);
        assert_eq!(grid.placeholders(), 2);
    }

    #[test]
    fn test_column_clamping() {
        assert_eq!(GridLayout::new(4, 0).unwrap().columns, 1);
        assert_eq!(GridLayout::new(4, -3).unwrap().columns, 1);
        assert_eq!(GridLayout::new(4, 10).unwrap().columns, 4);
        assert_eq!(GridLayout::new(4, 10).unwrap().rows, 1);
        assert!(GridLayout::new(0, 3).is_none());
    }

    #[test]
    fn test_last_row_is_padded() {
        let grid = GridLayout::new(5, 2).unwrap();
        let rows: Vec<Vec<Cell>> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 2));
        assert_eq!(rows[2], vec![Cell::Item(4), Cell::Placeholder]);
    }

    #[test]
    fn test_parity_is_one_based() {
        let grid = GridLayout::new(6, 2).unwrap();
        assert_eq!(grid.row_parity(0), Parity::Odd);
        assert_eq!(grid.row_parity(1), Parity::Even);
        assert_eq!(grid.cell_parity(0), Parity::Odd);
        assert_eq!(grid.cell_parity(1), Parity::Even);
    }
}
