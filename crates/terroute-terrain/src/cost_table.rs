use terroute_core::CostSurface;

use crate::classify::LabelGrid;
use crate::error::TerrainError;
use crate::terrain::Terrain;

/// Traversal cost per [`Terrain`].
///
/// With the `serde` feature a table deserializes from an object keyed by
/// lowercase terrain name. Missing keys keep their default cost, so
/// `{"road": 10}` overrides only roads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CostTable {
    pub water: f64,
    pub forest: f64,
    pub urban: f64,
    pub barren: f64,
    pub road: f64,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            water: 1000.0,
            forest: 500.0,
            urban: 200.0,
            barren: 100.0,
            road: 50.0,
        }
    }
}

impl CostTable {
    /// Cost of entering a cell of `terrain`.
    #[inline]
    pub fn cost(&self, terrain: Terrain) -> f64 {
        match terrain {
            Terrain::Water => self.water,
            Terrain::Forest => self.forest,
            Terrain::Urban => self.urban,
            Terrain::Barren => self.barren,
            Terrain::Road => self.road,
        }
    }

    /// Set the cost of one terrain.
    pub fn set(&mut self, terrain: Terrain, cost: f64) -> Result<(), TerrainError> {
        check_cost(terrain, cost)?;
        let slot = match terrain {
            Terrain::Water => &mut self.water,
            Terrain::Forest => &mut self.forest,
            Terrain::Urban => &mut self.urban,
            Terrain::Barren => &mut self.barren,
            Terrain::Road => &mut self.road,
        };
        *slot = cost;
        Ok(())
    }

    /// Merge several overrides. Nothing changes if any of them is invalid.
    pub fn update(
        &mut self,
        costs: impl IntoIterator<Item = (Terrain, f64)>,
    ) -> Result<(), TerrainError> {
        let mut next = *self;
        for (t, c) in costs {
            next.set(t, c)?;
        }
        *self = next;
        Ok(())
    }

    /// Check every cost is finite and nonnegative.
    pub fn validate(&self) -> Result<(), TerrainError> {
        Terrain::ALL
            .into_iter()
            .try_for_each(|t| check_cost(t, self.cost(t)))
    }

    /// Map every label in `labels` to its cost.
    pub fn build_surface(&self, labels: &LabelGrid) -> Result<CostSurface, TerrainError> {
        self.validate()?;
        let costs = labels.as_slice().iter().map(|&t| self.cost(t)).collect();
        let surface = CostSurface::new(labels.dims(), costs)?;
        log::debug!("built {} cost surface from terrain labels", labels.dims());
        Ok(surface)
    }
}

fn check_cost(terrain: Terrain, value: f64) -> Result<(), TerrainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidCost { terrain, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terroute_core::Cell;

    #[test]
    fn defaults() {
        let t = CostTable::default();
        assert_eq!(t.cost(Terrain::Water), 1000.0);
        assert_eq!(t.cost(Terrain::Forest), 500.0);
        assert_eq!(t.cost(Terrain::Urban), 200.0);
        assert_eq!(t.cost(Terrain::Barren), 100.0);
        assert_eq!(t.cost(Terrain::Road), 50.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn set_and_update() {
        let mut t = CostTable::default();
        t.set(Terrain::Road, 5.0).unwrap();
        assert_eq!(t.road, 5.0);

        t.update([(Terrain::Water, 2000.0), (Terrain::Urban, 0.0)])
            .unwrap();
        assert_eq!(t.water, 2000.0);
        assert_eq!(t.urban, 0.0);
    }

    #[test]
    fn invalid_update_is_atomic() {
        let mut t = CostTable::default();
        let err = t
            .update([(Terrain::Forest, 1.0), (Terrain::Barren, -1.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            TerrainError::InvalidCost {
                terrain: Terrain::Barren,
                ..
            }
        ));
        assert_eq!(t, CostTable::default());
        assert!(t.set(Terrain::Road, f64::NAN).is_err());
    }

    #[test]
    fn builds_surface_from_labels() {
        let labels = LabelGrid::from_labels(vec![vec![0, 1, 2], vec![3, 4, 4]]).unwrap();
        let s = CostTable::default().build_surface(&labels).unwrap();
        assert_eq!(s.dimensions(), (2, 3));
        assert_eq!(s.cost(Cell::new(0, 0)), Ok(1000.0));
        assert_eq!(s.cost(Cell::new(1, 0)), Ok(100.0));
        assert_eq!(s.cost(Cell::new(1, 2)), Ok(50.0));
    }

    #[test]
    fn invalid_table_is_rejected_before_building() {
        let labels = LabelGrid::from_labels(vec![vec![0]]).unwrap();
        let table = CostTable {
            water: -3.0,
            ..CostTable::default()
        };
        assert!(table.build_surface(&labels).is_err());
    }
}
