use std::fmt;
use std::str::FromStr;

use crate::classify::Rgb;
use crate::error::TerrainError;

/// A land-cover category. The discriminant is the numeric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Terrain {
    #[default]
    Water = 0,
    Forest = 1,
    Urban = 2,
    Barren = 3,
    Road = 4,
}

impl Terrain {
    /// Every category, in label order.
    pub const ALL: [Terrain; 5] = [
        Terrain::Water,
        Terrain::Forest,
        Terrain::Urban,
        Terrain::Barren,
        Terrain::Road,
    ];

    /// Numeric label.
    #[inline]
    pub const fn label(self) -> u8 {
        self as u8
    }

    /// Category for a numeric label.
    pub fn from_label(label: u8) -> Result<Self, TerrainError> {
        Self::ALL
            .get(usize::from(label))
            .copied()
            .ok_or(TerrainError::UnknownLabel(label))
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Water => "Water",
            Terrain::Forest => "Forest",
            Terrain::Urban => "Urban",
            Terrain::Barren => "Barren",
            Terrain::Road => "Road",
        }
    }

    /// Color used when drawing a label map.
    pub const fn color(self) -> Rgb {
        match self {
            Terrain::Water => Rgb::new(0, 0, 255),
            Terrain::Forest => Rgb::new(34, 139, 34),
            Terrain::Urban => Rgb::new(128, 128, 128),
            Terrain::Barren => Rgb::new(210, 180, 140),
            Terrain::Road => Rgb::new(0, 0, 0),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Terrain {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TerrainError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for t in Terrain::ALL {
            assert_eq!(Terrain::from_label(t.label()), Ok(t));
        }
        assert_eq!(Terrain::Road.label(), 4);
        assert_eq!(Terrain::from_label(5), Err(TerrainError::UnknownLabel(5)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("forest".parse::<Terrain>(), Ok(Terrain::Forest));
        assert_eq!(" ROAD ".parse::<Terrain>(), Ok(Terrain::Road));
        assert!("lava".parse::<Terrain>().is_err());
        assert_eq!(Terrain::Barren.to_string(), "Barren");
    }
}
