//! Loading grids and cost tables from JSON files.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use terroute_core::{CostSurface, SurfaceError};
use terroute_terrain::{CostTable, LabelGrid, TerrainError};

/// Errors raised while reading input files.
#[derive(Debug)]
pub enum InputError {
    Io { path: PathBuf, source: io::Error },
    Image { path: PathBuf, source: image::ImageError },
    Json(serde_json::Error),
    Surface(SurfaceError),
    Terrain(TerrainError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Image { path, source } => write!(f, "image {}: {source}", path.display()),
            Self::Json(e) => write!(f, "malformed JSON: {e}"),
            Self::Surface(e) => write!(f, "{e}"),
            Self::Terrain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Surface(e) => Some(e),
            Self::Terrain(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<SurfaceError> for InputError {
    fn from(e: SurfaceError) -> Self {
        Self::Surface(e)
    }
}

impl From<TerrainError> for InputError {
    fn from(e: TerrainError) -> Self {
        Self::Terrain(e)
    }
}

/// Parse a JSON 2-D array of costs.
pub fn parse_cost_grid(json: &str) -> Result<CostSurface, InputError> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
    Ok(CostSurface::from_rows(rows)?)
}

/// Parse a JSON 2-D array of terrain labels.
pub fn parse_label_grid(json: &str) -> Result<LabelGrid, InputError> {
    let rows: Vec<Vec<u8>> = serde_json::from_str(json)?;
    Ok(LabelGrid::from_labels(rows)?)
}

/// Parse a JSON object of cost overrides onto the default table.
pub fn parse_cost_table(json: &str) -> Result<CostTable, InputError> {
    let table: CostTable = serde_json::from_str(json)?;
    table.validate()?;
    Ok(table)
}

/// Read a whole file as UTF-8.
pub fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use terroute_core::Cell;
    use terroute_terrain::Terrain;

    #[test]
    fn cost_grid() {
        let s = parse_cost_grid("[[1, 2.5], [0, 4]]").unwrap();
        assert_eq!(s.dimensions(), (2, 2));
        assert_eq!(s.cost(Cell::new(0, 1)), Ok(2.5));
    }

    #[test]
    fn cost_grid_errors() {
        assert!(matches!(parse_cost_grid("[[1, 2], [3]]"), Err(InputError::Surface(_))));
        assert!(matches!(parse_cost_grid("[[1, -2]]"), Err(InputError::Surface(_))));
        assert!(matches!(parse_cost_grid("{"), Err(InputError::Json(_))));
    }

    #[test]
    fn label_grid() {
        let g = parse_label_grid("[[0, 4], [2, 1]]").unwrap();
        assert_eq!(g.get(Cell::new(0, 1)), Some(Terrain::Road));
        assert!(matches!(parse_label_grid("[[7]]"), Err(InputError::Terrain(_))));
    }

    #[test]
    fn cost_table_overrides() {
        let t = parse_cost_table(r#"{"road": 1}"#).unwrap();
        assert_eq!(t.road, 1.0);
        assert_eq!(t.water, 1000.0);
        assert!(matches!(parse_cost_table(r#"{"road": -1}"#), Err(InputError::Terrain(_))));
    }

    #[test]
    fn read_reports_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "[[1]]").unwrap();
        assert_eq!(read(f.path()).unwrap(), "[[1]]");

        let missing = f.path().with_extension("missing");
        let err = read(&missing).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
