//! Terrain categories and the cost grids derived from them.
//!
//! This crate produces the [`CostSurface`](terroute_core::CostSurface) a
//! route search consumes:
//!
//! 1. [`classify_pixel`] / [`LabelGrid::classify`] assign each RGB pixel a
//!    [`Terrain`] by simple color thresholds.
//! 2. A [`CostTable`] maps each terrain to a traversal cost.
//! 3. [`CostTable::build_surface`] turns a label grid into a cost surface.
//!
//! [`class_statistics`] and [`terrain_statistics`] summarize a labelling.

mod classify;
mod cost_table;
mod error;
mod stats;
mod terrain;

pub use classify::{LabelGrid, Rgb, classify_pixel};
pub use cost_table::CostTable;
pub use error::TerrainError;
pub use stats::{ClassStats, TerrainStats, class_statistics, terrain_statistics};
pub use terrain::Terrain;
