//! Text rendering of a route over its grid.

use std::collections::HashSet;

use terroute_core::{Cell, CostSurface, Dims};
use terroute_terrain::{LabelGrid, Terrain};

pub const START: char = 'S';
pub const END: char = 'E';
pub const ROUTE: char = '*';

/// Draw `dims` row by row using `base` for each cell, with route cells
/// replaced by `*` and the endpoints by `S` and `E`.
pub fn render(
    dims: Dims,
    path: &[Cell],
    start: Cell,
    end: Cell,
    base: impl Fn(Cell) -> char,
) -> String {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let mut out = String::with_capacity(dims.len() + dims.rows);
    for row in 0..dims.rows {
        for col in 0..dims.cols {
            let c = Cell::new(row as i32, col as i32);
            let ch = if c == start {
                START
            } else if c == end {
                END
            } else if on_path.contains(&c) {
                ROUTE
            } else {
                base(c)
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Glyph for a terrain cell.
pub fn terrain_glyph(t: Terrain) -> char {
    match t {
        Terrain::Water => '~',
        Terrain::Forest => 'f',
        Terrain::Urban => '#',
        Terrain::Barren => '.',
        Terrain::Road => '=',
    }
}

/// Base layer for a label grid.
pub fn label_base(labels: &LabelGrid) -> impl Fn(Cell) -> char + '_ {
    move |c| labels.get(c).map_or(' ', terrain_glyph)
}

/// Base layer for a raw cost grid: the cost's decile between the surface
/// minimum and maximum, `0`–`9`.
pub fn cost_base(surface: &CostSurface) -> impl Fn(Cell) -> char + '_ {
    let summary = surface.summary();
    let span = summary.max - summary.min;
    move |c| {
        let Ok(cost) = surface.cost(c) else {
            return ' ';
        };
        let bucket = if span > 0.0 {
            (((cost - summary.min) / span) * 9.0).round() as u32
        } else {
            0
        };
        char::from_digit(bucket.min(9), 10).unwrap_or('?')
    }
}
