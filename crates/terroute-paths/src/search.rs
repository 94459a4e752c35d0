use std::fmt;

use terroute_core::{Cell, CostSurface, Dims};

use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::ledger::Ledger;
use crate::neighbors::Neighbors;
use crate::options::SearchOptions;
use crate::reconstruct::{PathStats, path_stats, reconstruct};
use crate::traits::{Euclidean, Heuristic};

/// Lifecycle of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Endpoints are being validated; nothing is allocated yet.
    Init,
    /// Cells are being expanded.
    Running,
    /// The end cell was popped from the frontier.
    Found,
    /// The frontier ran dry first.
    Exhausted,
}

impl SearchState {
    /// Whether the search loop has stopped.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Init => "init",
            Self::Running => "running",
            Self::Found => "found",
            Self::Exhausted => "exhausted",
        };
        f.write_str(s)
    }
}

/// Work counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Cells closed.
    pub expanded: u64,
    /// Frontier pushes, the initial one included.
    pub pushed: u64,
    /// Frontier pops discarded as stale.
    pub stale: u64,
}

/// A connecting route and its statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Cells from start to end inclusive.
    pub path: Vec<Cell>,
    pub stats: PathStats,
    pub report: SearchReport,
}

impl Route {
    /// First cell.
    pub fn start(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Last cell.
    pub fn end(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Accumulated cost, start cell excluded.
    pub fn total_cost(&self) -> f64 {
        self.stats.total_cost
    }
}

/// Terminal result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Route),
    /// Every reachable cell was expanded without reaching the end.
    NoPath { report: SearchReport },
}

impl SearchOutcome {
    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoPath { .. } => None,
        }
    }

    /// Consume the outcome, keeping the route if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Found(r) => Some(r),
            Self::NoPath { .. } => None,
        }
    }

    /// Work counters of the search.
    pub fn report(&self) -> SearchReport {
        match self {
            Self::Found(r) => r.report,
            Self::NoPath { report } => *report,
        }
    }
}

/// A reusable, immutable search configuration.
///
/// `Planner` holds no per-search state: every [`find_path`](Self::find_path)
/// call allocates its own ledger and frontier. It can be shared by reference
/// between threads when its heuristic is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct Planner<H = Euclidean> {
    heuristic: H,
    options: SearchOptions,
}

impl Planner<Euclidean> {
    /// A planner with the Euclidean heuristic and no limits.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> Planner<H> {
    /// A planner with a custom heuristic and no limits.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            options: SearchOptions::default(),
        }
    }

    /// Replace the search limits.
    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Find a minimum-cost route from `start` to `end` over `surface`.
    ///
    /// Returns `Ok(SearchOutcome::NoPath)` when the end is unreachable, and
    /// an error only for bad endpoints, tripped limits or a corrupt ledger.
    pub fn find_path(
        &self,
        surface: &CostSurface,
        start: Cell,
        end: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        // Reject bad endpoints before allocating anything.
        let mut state = SearchState::Init;
        let dims = surface.dims();
        let start_idx = checked_index(Endpoint::Start, start, dims)?;
        checked_index(Endpoint::End, end, dims)?;
        log::debug!("search {start} -> {end} on {dims}: {state}");

        let mut ledger = Ledger::new(dims, start_idx);
        let mut frontier = Frontier::new();
        frontier.push(start, 0.0, self.heuristic.estimate(start, end));

        let mut report = SearchReport::default();
        let mut neighbors = Neighbors::new();

        state = SearchState::Running;
        while !state.is_terminal() {
            if let Err(e) = self.options.check_interrupt() {
                log::warn!("search {start} -> {end} aborted while {state}: {e}");
                return Err(e);
            }

            let Some(entry) = pop_valid(&mut frontier, &ledger, &mut report) else {
                state = SearchState::Exhausted;
                continue;
            };
            let current = entry.cell;
            if current == end {
                state = SearchState::Found;
                continue;
            }

            let Some(ci) = dims.index(current) else {
                continue;
            };
            if let Err(e) = self.options.check_budget(report.expanded) {
                log::warn!("search {start} -> {end} aborted: {e}");
                return Err(e);
            }
            ledger.close(ci);
            report.expanded += 1;
            let current_g = ledger.best_at(ci);

            for &n in neighbors.in_bounds(current, dims) {
                let Some(ni) = dims.index(n) else {
                    continue;
                };
                if ledger.is_closed_at(ni) {
                    continue;
                }
                let tentative = current_g + surface.cost_at(ni);
                if ledger.relax(ni, tentative, ci) {
                    frontier.push(n, tentative, tentative + self.heuristic.estimate(n, end));
                }
            }
        }

        report.pushed = frontier.pushes();
        log::debug!(
            "search {start} -> {end} {state}: expanded {}, pushed {}, stale {}",
            report.expanded,
            report.pushed,
            report.stale
        );

        if state == SearchState::Exhausted {
            return Ok(SearchOutcome::NoPath { report });
        }

        let path = reconstruct(&ledger, start, end)?;
        let stats = path_stats(&path, surface)?;
        debug_assert_eq!(ledger.best_cost(end), Some(stats.total_cost));
        Ok(SearchOutcome::Found(Route {
            path,
            stats,
            report,
        }))
    }
}

/// Find a route with the default [`Planner`]: Euclidean heuristic, no limits.
pub fn find_path(
    surface: &CostSurface,
    start: Cell,
    end: Cell,
) -> Result<SearchOutcome, SearchError> {
    Planner::new().find_path(surface, start, end)
}

fn checked_index(endpoint: Endpoint, cell: Cell, dims: Dims) -> Result<usize, SearchError> {
    dims.index(cell).ok_or(SearchError::InvalidInput {
        endpoint,
        cell,
        dims,
    })
}

/// Pop until an entry agrees with the ledger, discarding stale ones.
fn pop_valid(
    frontier: &mut Frontier,
    ledger: &Ledger,
    report: &mut SearchReport,
) -> Option<FrontierEntry> {
    while let Some(entry) = frontier.pop_min() {
        let Some(i) = ledger.dims().index(entry.cell) else {
            continue;
        };
        if ledger.is_closed_at(i) || entry.cost > ledger.best_at(i) {
            log::trace!("discard stale {} at cost {}", entry.cell, entry.cost);
            report.stale += 1;
            continue;
        }
        return Some(entry);
    }
    None
}
