//! Geometry primitives: [`Cell`] and [`Dims`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right, matching the raster layout of the imagery cost grids are built from.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate.
///
/// A `Cell` may hold negative or oversized coordinates; whether it is valid
/// is a property of the [`Dims`] it is checked against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// The shape of a rectangular grid: `rows × cols`.
///
/// Valid cells satisfy `0 ≤ row < rows` and `0 ≤ col < cols`. Cells map to
/// flat storage in row-major order, `row * cols + col`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    /// Largest number of rows or columns a grid may have, so that every
    /// cell is addressable by a [`Cell`].
    pub const MAX_SIDE: usize = i32::MAX as usize;

    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells, saturating at `usize::MAX`.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Number of cells, or `None` if a side exceeds [`Dims::MAX_SIDE`] or
    /// the count overflows `usize`.
    #[inline]
    pub const fn checked_len(self) -> Option<usize> {
        if self.rows > Self::MAX_SIDE || self.cols > Self::MAX_SIDE {
            return None;
        }
        self.rows.checked_mul(self.cols)
    }

    /// Whether the grid holds no cells at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `cell` lies within `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Flat row-major index of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols + cell.col as usize)
    }

    /// Convert a flat index back to a `Cell`.
    ///
    /// The index must be `< self.len()`, and both sides at most
    /// [`Dims::MAX_SIDE`].
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        Cell::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Row-major iterator over every cell.
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.dims.len() {
            return None;
        }
        let c = self.dims.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.dims.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DimsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 1), Cell::new(0, 3));
    }

    #[test]
    fn cell_ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(2, 2);
        assert!(c.is_adjacent(Cell::new(1, 1)));
        assert!(c.is_adjacent(Cell::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cell::new(4, 2)));
    }

    #[test]
    fn dims_bounds() {
        let d = Dims::new(3, 4);
        assert!(d.contains(Cell::new(0, 0)));
        assert!(d.contains(Cell::new(2, 3)));
        assert!(!d.contains(Cell::new(3, 0)));
        assert!(!d.contains(Cell::new(0, 4)));
        assert!(!d.contains(Cell::new(-1, 0)));
        assert!(!d.contains(Cell::new(0, -1)));
    }

    #[test]
    fn dims_index_round_trip() {
        let d = Dims::new(3, 4);
        for (i, c) in d.iter().enumerate() {
            assert_eq!(d.index(c), Some(i));
            assert_eq!(d.cell(i), c);
        }
        assert_eq!(d.index(Cell::new(1, 2)), Some(6));
        assert_eq!(d.index(Cell::new(5, 5)), None);
    }

    #[test]
    fn oversized_dims() {
        assert_eq!(Dims::new(3, 4).checked_len(), Some(12));
        assert_eq!(Dims::new(Dims::MAX_SIDE, 1).checked_len(), Some(Dims::MAX_SIDE));
        assert_eq!(Dims::new(Dims::MAX_SIDE + 1, 1).checked_len(), None);
        assert_eq!(Dims::new(1, usize::MAX).checked_len(), None);
        assert_eq!(Dims::new(usize::MAX, 2).len(), usize::MAX);
    }

    #[test]
    fn dims_iter_len() {
        let d = Dims::new(2, 3);
        assert_eq!(d.iter().len(), 6);
        assert_eq!(d.iter().last(), Some(Cell::new(1, 2)));
        assert_eq!(Dims::new(0, 5).iter().count(), 0);
        assert!(Dims::new(0, 5).is_empty());
    }
}
