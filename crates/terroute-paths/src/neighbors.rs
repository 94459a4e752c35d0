use terroute_core::{Cell, Dims};

/// The eight compass offsets, in the fixed order the search examines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// All directions, clockwise from north.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// `(row, col)` delta. North is row − 1.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Compass::N => (-1, 0),
            Compass::NE => (-1, 1),
            Compass::E => (0, 1),
            Compass::SE => (1, 1),
            Compass::S => (1, 0),
            Compass::SW => (1, -1),
            Compass::W => (0, -1),
            Compass::NW => (-1, -1),
        }
    }

    /// Whether this is a diagonal move.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    /// The cell one step from `c` in this direction.
    #[inline]
    pub const fn step(self, c: Cell) -> Cell {
        let (dr, dc) = self.offset();
        c.shift(dr, dc)
    }

    /// The direction leading from `from` to an adjacent `to`, if any.
    pub fn between(from: Cell, to: Cell) -> Option<Compass> {
        Self::ALL.into_iter().find(|d| d.step(from) == to)
    }
}

/// Cached neighbor computation helper.
///
/// Enumerates the 8-connected neighbors of a cell in [`Compass::ALL`] order,
/// reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbors of `c`, keeping only those for which `keep`
    /// returns `true`.
    pub fn all(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for d in Compass::ALL {
            let n = d.step(c);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the neighbors of `c` that lie inside `dims`.
    pub fn in_bounds(&mut self, c: Cell, dims: Dims) -> &[Cell] {
        self.all(c, |n| dims.contains(n))
    }
}
