use std::fmt;

use terroute_core::{Dims, SurfaceError};

use crate::terrain::Terrain;

/// Errors raised while labelling terrain or building cost tables.
#[derive(Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// A numeric label outside `0..=4`.
    UnknownLabel(u8),
    /// A terrain name that matches no category.
    UnknownName(String),
    /// A cost that is negative, NaN or infinite.
    InvalidCost { terrain: Terrain, value: f64 },
    /// The label grid has no cells.
    Empty,
    /// A label row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pixel buffer does not match `rows * cols`.
    LengthMismatch { expected: usize, found: usize },
    /// A side exceeds [`Dims::MAX_SIDE`] or the cell count overflows.
    TooLarge { dims: Dims },
    Surface(SurfaceError),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabel(l) => write!(f, "unknown terrain label {l}"),
            Self::UnknownName(n) => write!(f, "unknown terrain \u{201c}{n}\u{201d}"),
            Self::InvalidCost { terrain, value } => {
                write!(f, "invalid cost {value} for {terrain}: costs must be finite and >= 0")
            }
            Self::Empty => write!(f, "label grid has no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "label row {row} has {found} columns, expected {expected}"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "pixel buffer holds {found} values, expected {expected}")
            }
            Self::TooLarge { dims } => write!(f, "label grid of {dims} is too large"),
            Self::Surface(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SurfaceError> for TerrainError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}
