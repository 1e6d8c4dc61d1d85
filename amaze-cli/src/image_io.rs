//! PNG pixel classification at the maze boundary.
//!
//! Exactly white pixels are passages; every other color is a wall. The
//! encoder writes walls as black, passages as white and found-route cells
//! as red, so a solved image fed back in treats the marked route as
//! blocked.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use amaze_core::{Cell, Maze, Point};

/// Passage color, the only pixel value classified as traversable.
pub const PASSAGE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Wall color used on encode.
pub const WALL: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Route marker color used on encode.
pub const PATH: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Classify a decoded pixel buffer into a maze.
pub fn decode(img: &RgbaImage) -> Maze {
    Maze::from_fn(img.width() as i32, img.height() as i32, |p| {
        if *img.get_pixel(p.x as u32, p.y as u32) == PASSAGE {
            Cell::Passage
        } else {
            Cell::Wall
        }
    })
}

/// Render a maze as a pixel buffer.
pub fn encode(maze: &Maze) -> RgbaImage {
    RgbaImage::from_fn(maze.width() as u32, maze.height() as u32, |x, y| {
        match maze.at(Point::new(x as i32, y as i32)) {
            Some(Cell::Passage) => PASSAGE,
            Some(Cell::Path) => PATH,
            _ => WALL,
        }
    })
}

/// Load and classify a maze image.
pub fn load(path: &Path) -> Result<Maze> {
    let img = image::open(path)
        .with_context(|| format!("failed to read maze image {}", path.display()))?;
    Ok(decode(&img.to_rgba8()))
}

/// Encode and write a maze image.
pub fn save(maze: &Maze, path: &Path) -> Result<()> {
    encode(maze)
        .save(path)
        .with_context(|| format!("failed to write maze image {}", path.display()))
}
