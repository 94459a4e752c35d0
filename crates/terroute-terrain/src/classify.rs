//! Rule-based color classification of imagery into [`Terrain`] labels.

use terroute_core::{Cell, Dims};

use crate::error::TerrainError;
use crate::terrain::Terrain;

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Classify one pixel by channel thresholds.
///
/// Rules are tested in the order water, forest, urban, barren, road; a later
/// rule wins where rules overlap unless it explicitly excludes an earlier
/// category. Pixels no rule claims fall back to [`Terrain::Water`], label 0.
pub fn classify_pixel(px: Rgb) -> Terrain {
    let r = f32::from(px.r) / 255.0;
    let g = f32::from(px.g) / 255.0;
    let b = f32::from(px.b) / 255.0;

    let water = b > 0.5 && r < 0.3 && g < 0.5;
    let forest = g > 0.4 && g > r && g > b && !water;
    let urban = (r - g).abs() < 0.1
        && (g - b).abs() < 0.1
        && (r - b).abs() < 0.1
        && r > 0.3
        && !water
        && !forest;
    let barren = r > 0.4 && g > 0.4 && b < 0.4 && !water && !forest && !urban;
    let road = r < 0.2 && g < 0.2 && b < 0.2 && !water;

    if road {
        Terrain::Road
    } else if barren {
        Terrain::Barren
    } else if urban {
        Terrain::Urban
    } else if forest {
        Terrain::Forest
    } else {
        Terrain::Water
    }
}

/// A rectangular grid of terrain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    dims: Dims,
    labels: Vec<Terrain>,
}

impl LabelGrid {
    /// Build a grid from row-major labels.
    pub fn new(dims: Dims, labels: Vec<Terrain>) -> Result<Self, TerrainError> {
        if dims.is_empty() {
            return Err(TerrainError::Empty);
        }
        let len = checked_len(dims)?;
        if labels.len() != len {
            return Err(TerrainError::LengthMismatch {
                expected: len,
                found: labels.len(),
            });
        }
        Ok(Self { dims, labels })
    }

    /// Classify a row-major pixel buffer.
    pub fn classify(dims: Dims, pixels: &[Rgb]) -> Result<Self, TerrainError> {
        let len = checked_len(dims)?;
        if pixels.len() != len {
            return Err(TerrainError::LengthMismatch {
                expected: len,
                found: pixels.len(),
            });
        }
        let labels = pixels.iter().copied().map(classify_pixel).collect();
        Self::new(dims, labels)
    }

    /// Build a grid from nested numeric labels.
    pub fn from_labels(rows: Vec<Vec<u8>>) -> Result<Self, TerrainError> {
        let cols = rows.first().map_or(0, Vec::len);
        let dims = Dims::new(rows.len(), cols);
        let mut labels = Vec::with_capacity(checked_len(dims)?);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(TerrainError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for l in row {
                labels.push(Terrain::from_label(l)?);
            }
        }
        Self::new(dims, labels)
    }

    /// Grid shape.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Label at `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<Terrain> {
        self.dims.index(cell).map(|i| self.labels[i])
    }

    /// The row-major label buffer.
    #[inline]
    pub fn as_slice(&self) -> &[Terrain] {
        &self.labels
    }

    /// Number of cells per terrain, indexed by label.
    pub fn counts(&self) -> [usize; 5] {
        let mut counts = [0; 5];
        for t in &self.labels {
            counts[usize::from(t.label())] += 1;
        }
        counts
    }

    /// Render the labels as display colors, row-major.
    pub fn colorize(&self) -> Vec<Rgb> {
        self.labels.iter().map(|t| t.color()).collect()
    }
}

fn checked_len(dims: Dims) -> Result<usize, TerrainError> {
    dims.checked_len().ok_or(TerrainError::TooLarge { dims })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_reference_colors() {
        assert_eq!(classify_pixel(Rgb::new(20, 40, 200)), Terrain::Water);
        assert_eq!(classify_pixel(Rgb::new(30, 150, 40)), Terrain::Forest);
        assert_eq!(classify_pixel(Rgb::new(128, 128, 128)), Terrain::Urban);
        assert_eq!(classify_pixel(Rgb::new(210, 180, 90)), Terrain::Barren);
        assert_eq!(classify_pixel(Rgb::new(10, 10, 10)), Terrain::Road);
    }

    #[test]
    fn unmatched_pixels_fall_back_to_water() {
        assert_eq!(classify_pixel(Rgb::new(200, 50, 50)), Terrain::Water);
    }

    #[test]
    fn display_colors_classify_as_themselves() {
        for t in [Terrain::Water, Terrain::Forest, Terrain::Urban, Terrain::Road] {
            assert_eq!(classify_pixel(t.color()), t, "{t}");
        }
    }

    #[test]
    fn classify_grid() {
        let px = [
            Rgb::new(20, 40, 200),
            Rgb::new(10, 10, 10),
            Rgb::new(30, 150, 40),
            Rgb::new(128, 128, 128),
        ];
        let grid = LabelGrid::classify(Dims::new(2, 2), &px).unwrap();
        assert_eq!(grid.get(Cell::new(0, 1)), Some(Terrain::Road));
        assert_eq!(grid.get(Cell::new(1, 0)), Some(Terrain::Forest));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.counts(), [1, 1, 1, 0, 1]);
        assert!(LabelGrid::classify(Dims::new(2, 2), &px[..3]).is_err());
    }

    #[test]
    fn rejects_oversized_dims() {
        let huge = Dims::new(3, Dims::MAX_SIDE + 1);
        assert_eq!(
            LabelGrid::new(huge, vec![]),
            Err(TerrainError::TooLarge { dims: huge })
        );
        assert_eq!(
            LabelGrid::classify(huge, &[]),
            Err(TerrainError::TooLarge { dims: huge })
        );
    }

    #[test]
    fn from_labels_validates() {
        let grid = LabelGrid::from_labels(vec![vec![0, 4], vec![3, 3]]).unwrap();
        assert_eq!(grid.dims(), Dims::new(2, 2));
        assert_eq!(grid.colorize()[1], Terrain::Road.color());
        assert_eq!(
            LabelGrid::from_labels(vec![vec![0, 9]]),
            Err(TerrainError::UnknownLabel(9))
        );
        assert_eq!(
            LabelGrid::from_labels(vec![vec![0, 1], vec![2]]),
            Err(TerrainError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(LabelGrid::from_labels(vec![]), Err(TerrainError::Empty));
    }
}
