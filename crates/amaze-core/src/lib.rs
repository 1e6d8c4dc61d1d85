//! **amaze-core** — Raster maze model and path rendering (core types).
//!
//! This crate provides the foundational types used across the *amaze*
//! ecosystem: the 2-D point primitive, the binary maze raster with its
//! ASCII fixture format, and the route renderer that paints a sparse
//! waypoint path back onto the raster.

pub mod geom;
pub mod maze;
pub mod render;

pub use geom::Point;
pub use maze::{Cell, Maze, ParseMazeError};
