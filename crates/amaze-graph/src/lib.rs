//! Maze graph compilation and shortest-path search.
//!
//! This crate turns a raster [`Maze`](amaze_core::Maze) into a sparse
//! topological graph and searches it for a route from entrance to exit:
//!
//! - [`MazeGraph::from_maze`] compresses every straight corridor into a
//!   single weighted edge between nodes at junctions, turns, dead ends and
//!   boundary openings.
//! - [`solve`] runs one of four interchangeable [`Strategy`]
//!   implementations, selected by [`Algorithm`]:
//!
//! | Algorithm | Exploration order | Guarantee |
//! |---|---|---|
//! | [`DepthFirst`] | one neighbor fully, then backtrack | some path |
//! | [`BreadthFirst`] | hop-count layers | fewest hops |
//! | [`Dijkstra`] | cumulative corridor distance | shortest in cells |
//! | [`AStar`] | distance plus admissible estimate | shortest in cells |
//!
//! Edge costs are Manhattan distances, which equal true corridor lengths
//! because edges only ever run along one axis. All searches are pure
//! functions of the graph with per-call local state.

mod astar;
mod bfs;
mod builder;
mod dfs;
mod dijkstra;
mod distance;
mod node;
mod path;
mod search;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use node::{Edge, MazeGraph, Node, NodeId};
pub use path::Path;
pub use search::{Algorithm, ParseAlgorithmError, Strategy, solve};
