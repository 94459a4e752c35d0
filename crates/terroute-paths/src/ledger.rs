use terroute_core::{Cell, Dims};

/// Sentinel for "no predecessor" in the flat predecessor array.
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

/// Per-search bookkeeping: best known cost, predecessor and closed flag for
/// every cell.
///
/// Storage is three flat arrays indexed by `row * cols + col`. Predecessors
/// are plain indices into the same ledger. A ledger belongs to exactly one
/// search call and is dropped when it returns.
#[derive(Debug, Clone)]
pub struct Ledger {
    dims: Dims,
    best: Vec<f64>,
    pred: Vec<usize>,
    closed: Vec<bool>,
}

impl Ledger {
    /// Create a ledger for `dims` with `start` discovered at cost 0 and every
    /// other cell unknown.
    pub(crate) fn new(dims: Dims, start: usize) -> Self {
        let len = dims.len();
        let mut best = vec![f64::INFINITY; len];
        best[start] = 0.0;
        Self {
            dims,
            best,
            pred: vec![NO_PREDECESSOR; len],
            closed: vec![false; len],
        }
    }

    /// Grid shape this ledger covers.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Best known cost to `cell`, or `None` if undiscovered or out of bounds.
    pub fn best_cost(&self, cell: Cell) -> Option<f64> {
        let i = self.dims.index(cell)?;
        let g = self.best[i];
        g.is_finite().then_some(g)
    }

    /// The cell `cell`'s best cost was reached from, if any.
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        let i = self.dims.index(cell)?;
        self.pred_at(i).map(|p| self.dims.cell(p))
    }

    /// Whether `cell` has been finalized.
    pub fn is_closed(&self, cell: Cell) -> bool {
        self.dims.index(cell).is_some_and(|i| self.closed[i])
    }

    /// Number of cells with a finite best cost.
    pub fn discovered(&self) -> usize {
        self.best.iter().filter(|g| g.is_finite()).count()
    }

    // -----------------------------------------------------------------------
    // Index-based access used by the search loop
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn best_at(&self, i: usize) -> f64 {
        self.best[i]
    }

    #[inline]
    pub(crate) fn pred_at(&self, i: usize) -> Option<usize> {
        let p = self.pred[i];
        (p != NO_PREDECESSOR).then_some(p)
    }

    #[inline]
    pub(crate) fn is_closed_at(&self, i: usize) -> bool {
        self.closed[i]
    }

    #[inline]
    pub(crate) fn close(&mut self, i: usize) {
        self.closed[i] = true;
    }

    /// Record `cost` via `from` if it strictly beats the current best.
    /// Returns whether the ledger changed.
    #[inline]
    pub(crate) fn relax(&mut self, i: usize, cost: f64, from: usize) -> bool {
        if cost < self.best[i] {
            self.best[i] = cost;
            self.pred[i] = from;
            true
        } else {
            false
        }
    }

    /// Overwrite an entry without the improvement check.
    #[cfg(test)]
    pub(crate) fn force(&mut self, i: usize, cost: f64, from: usize) {
        self.best[i] = cost;
        self.pred[i] = from;
    }
}
