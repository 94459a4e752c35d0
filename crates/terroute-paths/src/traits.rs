use terroute_core::Cell;

use crate::distance::{euclidean, octile};

/// Estimate of the remaining cost from one cell to a target.
///
/// A* returns optimal routes only when the estimate never exceeds the true
/// remaining cost. Because a step costs the destination cell's raw value
/// regardless of step length, that holds for [`Euclidean`] only while no
/// cell is cheaper than the geometric step onto it.
pub trait Heuristic {
    /// Nonnegative estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

/// Straight-line distance. The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }
}

/// Octile distance, tighter than [`Euclidean`] on 8-connected grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Octile;

impl Heuristic for Octile {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        octile(from, to)
    }
}

/// Always zero: the search degrades to Dijkstra and is optimal for any
/// nonnegative cost surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Cell, _to: Cell) -> f64 {
        0.0
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        (**self).estimate(from, to)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        (**self).estimate(from, to)
    }
}
