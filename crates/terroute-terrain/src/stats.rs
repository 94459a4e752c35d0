use crate::classify::LabelGrid;
use crate::cost_table::CostTable;
use crate::terrain::Terrain;

/// Share of a label grid covered by one terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassStats {
    pub terrain: Terrain,
    pub pixels: usize,
    /// Percent of all cells, 0–100.
    pub percentage: f64,
}

/// Cost contribution of one terrain present in a label grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainStats {
    pub terrain: Terrain,
    pub cost_value: f64,
    pub pixel_count: usize,
    pub total_cost: f64,
}

/// Pixel count and percentage for every terrain, absent ones included.
pub fn class_statistics(labels: &LabelGrid) -> Vec<ClassStats> {
    let counts = labels.counts();
    let total = labels.dims().len() as f64;
    Terrain::ALL
        .into_iter()
        .map(|terrain| {
            let pixels = counts[usize::from(terrain.label())];
            ClassStats {
                terrain,
                pixels,
                percentage: pixels as f64 / total * 100.0,
            }
        })
        .collect()
}

/// Cost value, pixel count and summed cost for each terrain that occurs.
pub fn terrain_statistics(labels: &LabelGrid, table: &CostTable) -> Vec<TerrainStats> {
    let counts = labels.counts();
    Terrain::ALL
        .into_iter()
        .filter_map(|terrain| {
            let pixel_count = counts[usize::from(terrain.label())];
            if pixel_count == 0 {
                return None;
            }
            let cost_value = table.cost(terrain);
            Some(TerrainStats {
                terrain,
                cost_value,
                pixel_count,
                total_cost: cost_value * pixel_count as f64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabelGrid {
        LabelGrid::from_labels(vec![vec![0, 0, 1, 4], vec![4, 4, 4, 1]]).unwrap()
    }

    #[test]
    fn class_shares() {
        let stats = class_statistics(&sample());
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].pixels, 2);
        assert_eq!(stats[0].percentage, 25.0);
        assert_eq!(stats[2].pixels, 0);
        assert_eq!(stats[4].percentage, 50.0);
        let sum: f64 = stats.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, 100.0);
    }

    #[test]
    fn terrain_costs_skip_absent_classes() {
        let stats = terrain_statistics(&sample(), &CostTable::default());
        let names: Vec<_> = stats.iter().map(|s| s.terrain).collect();
        assert_eq!(names, vec![Terrain::Water, Terrain::Forest, Terrain::Road]);
        assert_eq!(stats[0].total_cost, 2000.0);
        assert_eq!(stats[2].pixel_count, 4);
        assert_eq!(stats[2].total_cost, 200.0);
    }
}
