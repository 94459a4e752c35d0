//! PNG imagery in and annotated routes out.

use std::path::Path;

use image::{Rgb as Pixel, RgbImage};
use terroute_core::{Cell, Dims};
use terroute_terrain::{LabelGrid, Rgb};

use crate::input::InputError;

pub const ROUTE_COLOR: Pixel<u8> = Pixel([0, 255, 255]);
pub const START_COLOR: Pixel<u8> = Pixel([0, 255, 0]);
pub const END_COLOR: Pixel<u8> = Pixel([255, 0, 0]);

/// Decode an image file into row-major pixels. Rows follow image height.
pub fn load(path: &Path) -> Result<RgbImage, InputError> {
    let img = image::open(path).map_err(|source| InputError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Shape of `img` as a grid.
pub fn dims(img: &RgbImage) -> Dims {
    Dims::new(img.height() as usize, img.width() as usize)
}

/// Row-major pixels of `img` for classification.
pub fn pixels(img: &RgbImage) -> Vec<Rgb> {
    img.pixels()
        .map(|&Pixel([r, g, b])| Rgb::new(r, g, b))
        .collect()
}

/// Render a label grid in its display colors.
pub fn colorize(labels: &LabelGrid) -> RgbImage {
    let dims = labels.dims();
    let colors = labels.colorize();
    RgbImage::from_fn(dims.cols as u32, dims.rows as u32, |x, y| {
        let c = colors[y as usize * dims.cols + x as usize];
        Pixel([c.r, c.g, c.b])
    })
}

/// Marker radius in pixels: about 1% of the shorter side.
pub fn marker_radius(img: &RgbImage) -> u32 {
    img.width().min(img.height()) / 100
}

/// Paint `path` onto `img`, then filled discs at `start` and `end`.
///
/// Consecutive cells of a route are adjacent, so painting each cell draws
/// a connected line.
pub fn draw_route(img: &mut RgbImage, path: &[Cell], start: Cell, end: Cell) {
    for &c in path {
        put(img, c, ROUTE_COLOR);
    }
    let radius = marker_radius(img);
    draw_disc(img, start, radius, START_COLOR);
    draw_disc(img, end, radius, END_COLOR);
}

fn draw_disc(img: &mut RgbImage, center: Cell, radius: u32, color: Pixel<u8>) {
    let r = radius as i32;
    for dr in -r..=r {
        for dc in -r..=r {
            if dr * dr + dc * dc <= r * r {
                put(img, center.shift(dr, dc), color);
            }
        }
    }
}

fn put(img: &mut RgbImage, cell: Cell, color: Pixel<u8>) {
    if cell.row < 0 || cell.col < 0 {
        return;
    }
    let (x, y) = (cell.col as u32, cell.row as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// Encode `img`; the format follows the file extension.
pub fn save(img: &RgbImage, path: &Path) -> Result<(), InputError> {
    img.save(path).map_err(|source| InputError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {}x{} route image to {}", img.width(), img.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terroute_terrain::Terrain;

    #[test]
    fn pixels_are_row_major() {
        let img = RgbImage::from_fn(3, 2, |x, y| Pixel([x as u8, y as u8, 7]));
        assert_eq!(dims(&img), Dims::new(2, 3));
        let px = pixels(&img);
        assert_eq!(px.len(), 6);
        assert_eq!(px[4], Rgb::new(1, 1, 7));
    }

    #[test]
    fn colorize_uses_terrain_colors() {
        let labels = LabelGrid::from_labels(vec![vec![0, 4], vec![1, 2]]).unwrap();
        let img = colorize(&labels);
        let road = Terrain::Road.color();
        assert_eq!(img.get_pixel(1, 0), &Pixel([road.r, road.g, road.b]));
        let forest = Terrain::Forest.color();
        assert_eq!(img.get_pixel(0, 1), &Pixel([forest.r, forest.g, forest.b]));
    }

    #[test]
    fn route_and_markers() {
        let mut img = RgbImage::new(4, 3);
        let path = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 3)];
        draw_route(&mut img, &path, path[0], path[3]);
        assert_eq!(img.get_pixel(0, 0), &START_COLOR);
        assert_eq!(img.get_pixel(1, 1), &ROUTE_COLOR);
        assert_eq!(img.get_pixel(2, 1), &ROUTE_COLOR);
        assert_eq!(img.get_pixel(3, 2), &END_COLOR);
        assert_eq!(img.get_pixel(3, 0), &Pixel([0, 0, 0]));
    }

    #[test]
    fn discs_clip_at_edges() {
        let mut img = RgbImage::new(300, 200);
        assert_eq!(marker_radius(&img), 2);
        draw_route(&mut img, &[], Cell::new(0, 0), Cell::new(199, 299));
        assert_eq!(img.get_pixel(2, 0), &START_COLOR);
        assert_eq!(img.get_pixel(2, 2), &Pixel([0, 0, 0]));
        assert_eq!(img.get_pixel(299, 197), &END_COLOR);
    }
}
