//! Cost-weighted shortest-path search over 2D cost rasters.
//!
//! Given a [`CostSurface`](terroute_core::CostSurface) and two cells, the
//! [`Planner`] runs an A* search and returns the connecting route with the
//! lowest accumulated cost it finds, plus statistics about that route.
//!
//! Stepping onto a cell costs that cell's raw surface value, whether the
//! step is orthogonal or diagonal. Movement is 8-connected.
//!
//! Every call allocates its own [`Ledger`] and [`Frontier`] and drops them on
//! return, so a single `Planner` can serve any number of threads at once.
//!
//! # Pieces
//!
//! | Item | Role |
//! |---|---|
//! | [`Heuristic`] | remaining-cost estimate ([`Euclidean`] by default) |
//! | [`Frontier`] | open set ordered by `(estimate, seq)` with lazy deletion |
//! | [`Ledger`] | flat per-cell best cost, predecessor, closed flag |
//! | [`Planner`] | the search loop |
//! | [`reconstruct`] / [`path_stats`] | route recovery and aggregate stats |

mod distance;
mod error;
mod frontier;
mod ledger;
mod neighbors;
mod options;
mod reconstruct;
mod search;
mod traits;

pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::{Endpoint, SearchError};
pub use frontier::{Frontier, FrontierEntry};
pub use ledger::Ledger;
pub use neighbors::{Compass, Neighbors};
pub use options::{CancelToken, SearchOptions};
pub use reconstruct::{PathStats, path_stats, reconstruct};
pub use search::{Planner, Route, SearchOutcome, SearchReport, SearchState, find_path};
pub use traits::{Euclidean, Heuristic, Octile, Zero};
