//! **terroute-core**: foundational types for cost-weighted raster routing.
//!
//! This crate provides the geometry shared across the *terroute* crates:
//! grid coordinates ([`Cell`]), grid shapes ([`Dims`]) and the read-only
//! per-cell traversal cost grid ([`CostSurface`]).

pub mod geom;
pub mod surface;

pub use geom::{Cell, Dims};
pub use surface::{CostSurface, SurfaceError, SurfaceSummary};
