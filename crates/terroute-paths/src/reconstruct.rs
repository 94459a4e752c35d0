//! Route recovery from a [`Ledger`] and route statistics.

use terroute_core::{Cell, CostSurface, SurfaceError};

use crate::error::{Endpoint, SearchError};
use crate::ledger::Ledger;

/// Aggregate statistics of a route over a cost surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStats {
    /// Number of cells, both endpoints included.
    pub length: usize,
    /// Sum of the costs of every cell entered. The start cell is never
    /// entered and does not contribute.
    pub total_cost: f64,
    /// `total_cost / length`, or 0 for an empty path.
    pub average_cost: f64,
}

/// Compute [`PathStats`] for `path` over `surface`.
///
/// Depends only on its arguments, so any holder of a route and its surface
/// can recompute the numbers a search reported.
pub fn path_stats(path: &[Cell], surface: &CostSurface) -> Result<PathStats, SurfaceError> {
    let mut total_cost = 0.0;
    for &c in path.iter().skip(1) {
        total_cost += surface.cost(c)?;
    }
    let length = path.len();
    let average_cost = if length == 0 {
        0.0
    } else {
        total_cost / length as f64
    };
    Ok(PathStats {
        length,
        total_cost,
        average_cost,
    })
}

/// Walk predecessor links from `end` back to `start` and return the cells in
/// start-to-end order.
///
/// Fails with [`SearchError::ReconstructionInvariantViolation`] if the chain
/// stops anywhere but `start` or runs longer than the grid has cells.
pub fn reconstruct(ledger: &Ledger, start: Cell, end: Cell) -> Result<Vec<Cell>, SearchError> {
    let dims = ledger.dims();
    let (Some(start_idx), Some(mut ci)) = (dims.index(start), dims.index(end)) else {
        let (endpoint, cell) = if dims.contains(start) {
            (Endpoint::End, end)
        } else {
            (Endpoint::Start, start)
        };
        return Err(SearchError::InvalidInput {
            endpoint,
            cell,
            dims,
        });
    };

    let mut path = vec![end];
    let mut steps = 0;
    while ci != start_idx {
        if steps >= dims.len() {
            return Err(SearchError::ReconstructionInvariantViolation {
                reached: dims.cell(ci),
                steps,
            });
        }
        let Some(pi) = ledger.pred_at(ci) else {
            return Err(SearchError::ReconstructionInvariantViolation {
                reached: dims.cell(ci),
                steps,
            });
        };
        ci = pi;
        path.push(dims.cell(ci));
        steps += 1;
    }
    path.reverse();
    Ok(path)
}
