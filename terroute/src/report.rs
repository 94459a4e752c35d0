//! JSON summary printed after a search.

use serde::Serialize;
use terroute_core::{Cell, Dims, SurfaceSummary};
use terroute_paths::{PathStats, SearchOutcome, SearchReport};
use terroute_terrain::{ClassStats, TerrainStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Found,
    NoPath,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub status: Status,
    pub start: Cell,
    pub end: Cell,
    pub dims: Dims,
    pub surface: SurfaceSummary,
    /// Empty unless `status` is `found`.
    pub path: Vec<Cell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PathStats>,
    #[serde(rename = "report")]
    pub search: SearchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Vec<TerrainStats>>,
    /// Share of each terrain class, for classified imagery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<ClassStats>>,
}

impl RouteReport {
    pub fn new(
        outcome: &SearchOutcome,
        start: Cell,
        end: Cell,
        dims: Dims,
        surface: SurfaceSummary,
    ) -> Self {
        let (status, path, stats) = match outcome.route() {
            Some(route) => (Status::Found, route.path.clone(), Some(route.stats)),
            None => (Status::NoPath, Vec::new(), None),
        };
        Self {
            status,
            start,
            end,
            dims,
            surface,
            path,
            stats,
            search: outcome.report(),
            terrain: None,
            classes: None,
        }
    }

    /// Attach per-terrain cost statistics.
    pub fn with_terrain(mut self, terrain: Vec<TerrainStats>) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Attach per-class pixel shares.
    pub fn with_classes(mut self, classes: Vec<ClassStats>) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
