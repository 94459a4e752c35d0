//! The [`CostSurface`] type: an immutable grid of per-cell traversal costs.
//!
//! Costs are stored flat in row-major order. Every cost is finite and
//! nonnegative; zero means free traversal. Construction validates this once
//! so readers never have to.

use std::fmt;

use crate::geom::{Cell, Dims};

/// Errors raised while building or reading a [`CostSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The flat cost buffer does not match `rows * cols`.
    LengthMismatch { expected: usize, found: usize },
    /// A cost is negative, NaN or infinite.
    InvalidCost { cell: Cell, value: f64 },
    /// A side exceeds [`Dims::MAX_SIDE`] or the cell count overflows.
    TooLarge { dims: Dims },
    /// A lookup outside `[0, rows) × [0, cols)`.
    OutOfBounds { cell: Cell, dims: Dims },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cost surface has no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "cost surface row {row} has {found} columns, expected {expected}"
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "cost buffer holds {found} values, expected {expected}")
            }
            Self::InvalidCost { cell, value } => {
                write!(f, "invalid cost {value} at {cell}: costs must be finite and >= 0")
            }
            Self::TooLarge { dims } => write!(f, "cost surface of {dims} is too large"),
            Self::OutOfBounds { cell, dims } => {
                write!(f, "cell {cell} is outside the {dims} cost surface")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Aggregate view of a surface's costs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub cells: usize,
}

/// A read-only rectangular grid of nonnegative traversal costs.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSurface {
    dims: Dims,
    costs: Vec<f64>,
}

impl CostSurface {
    /// Build a surface from a row-major cost buffer.
    pub fn new(dims: Dims, costs: Vec<f64>) -> Result<Self, SurfaceError> {
        if dims.is_empty() {
            return Err(SurfaceError::Empty);
        }
        let len = checked_len(dims)?;
        if costs.len() != len {
            return Err(SurfaceError::LengthMismatch {
                expected: len,
                found: costs.len(),
            });
        }
        if let Some((i, &value)) = costs
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(SurfaceError::InvalidCost {
                cell: dims.cell(i),
                value,
            });
        }
        Ok(Self { dims, costs })
    }

    /// Build a surface from nested rows. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SurfaceError> {
        let cols = rows.first().map_or(0, Vec::len);
        let dims = Dims::new(rows.len(), cols);
        let mut costs = Vec::with_capacity(checked_len(dims)?);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(SurfaceError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            costs.extend(row);
        }
        Self::new(dims, costs)
    }

    /// A surface where every cell costs `cost`.
    pub fn filled(dims: Dims, cost: f64) -> Result<Self, SurfaceError> {
        if dims.is_empty() {
            return Err(SurfaceError::Empty);
        }
        Self::new(dims, vec![cost; checked_len(dims)?])
    }

    /// Grid shape.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Grid shape as `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.dims.rows, self.dims.cols)
    }

    /// Whether `cell` is a valid coordinate on this surface.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.dims.contains(cell)
    }

    /// Bounds-checked cost lookup.
    pub fn cost(&self, cell: Cell) -> Result<f64, SurfaceError> {
        self.dims
            .index(cell)
            .map(|i| self.costs[i])
            .ok_or(SurfaceError::OutOfBounds {
                cell,
                dims: self.dims,
            })
    }

    /// Cost at a flat row-major index. Panics if `idx >= dims().len()`.
    #[inline]
    pub fn cost_at(&self, idx: usize) -> f64 {
        self.costs[idx]
    }

    /// The raw row-major cost buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.costs
    }

    /// Row-major iterator over `(Cell, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.dims.iter().zip(self.costs.iter().copied())
    }

    /// Minimum, maximum and mean cost over all cells.
    pub fn summary(&self) -> SurfaceSummary {
        let mut min = f64::INFINITY;
        let mut max = 0.0_f64;
        let mut sum = 0.0;
        for &c in &self.costs {
            min = min.min(c);
            max = max.max(c);
            sum += c;
        }
        SurfaceSummary {
            min,
            max,
            mean: sum / self.costs.len() as f64,
            cells: self.costs.len(),
        }
    }
}

fn checked_len(dims: Dims) -> Result<usize, SurfaceError> {
    dims.checked_len().ok_or(SurfaceError::TooLarge { dims })
}
