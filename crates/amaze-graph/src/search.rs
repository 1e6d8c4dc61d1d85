//! Strategy selection and the shared search contract.

use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::node::{MazeGraph, NodeId};
use crate::path::Path;

/// A maze-solving search strategy.
///
/// All strategies share one contract: the search starts at the first
/// entrance candidate in scan order and succeeds on reaching *any* exit
/// candidate. Which exit is reached depends on the strategy's exploration
/// order. With no entrance candidate, or no exit reachable from the start,
/// the result is `None`.
pub trait Strategy {
    /// Search `graph` for a route from entrance to exit.
    fn find_path(&self, graph: &MazeGraph) -> Option<Path>;
}

/// Selects one of the four search strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Explores one neighbor fully before backtracking. Returns *some*
    /// path, with no optimality guarantee.
    #[default]
    DepthFirst,
    /// Expands nodes by hop count. Minimal in hops, not in corridor
    /// length.
    BreadthFirst,
    /// Expands nodes by cumulative corridor distance. Minimal in total
    /// corridor length.
    Dijkstra,
    /// Dijkstra plus an admissible remaining-distance estimate. Same
    /// optimal length, usually fewer expansions.
    AStar,
}

impl Algorithm {
    /// All selectable algorithms, in canonical order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Canonical selector name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "depth-first",
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// The strategy implementation behind this selector.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Algorithm::DepthFirst => &DepthFirst,
            Algorithm::BreadthFirst => &BreadthFirst,
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parse a selector name, case-insensitively. Accepts the canonical
    /// names plus the short forms `dfs`, `bfs` and `a-star`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(Algorithm::DepthFirst),
            "breadth-first" | "bfs" => Ok(Algorithm::BreadthFirst),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError { name: s.to_owned() }),
        }
    }
}

/// Error for an unrecognized algorithm selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?} (expected depth-first, breadth-first, dijkstra or astar)",
            self.name
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Solve `graph` with the selected algorithm.
///
/// Equivalent to `algorithm.strategy().find_path(graph)`.
pub fn solve(graph: &MazeGraph, algorithm: Algorithm) -> Option<Path> {
    algorithm.strategy().find_path(graph)
}

// ---------------------------------------------------------------------------
// Shared search machinery
// ---------------------------------------------------------------------------

/// Sentinel distance for nodes not yet reached.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Parent sentinel terminating a reconstruction walk.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// The start node: first entrance candidate in scan order, if any.
#[inline]
pub(crate) fn start_node(graph: &MazeGraph) -> Option<NodeId> {
    graph.entrances().first().copied()
}

/// Per-node goal flags, indexed by arena position.
pub(crate) fn exit_flags(graph: &MazeGraph) -> Vec<bool> {
    let mut flags = vec![false; graph.len()];
    for &e in graph.exits() {
        flags[e.index()] = true;
    }
    flags
}

/// Walk the parent chain back from `goal` and return the waypoint path.
pub(crate) fn reconstruct(graph: &MazeGraph, parent: &[usize], goal: usize) -> Path {
    let mut points = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        points.push(graph.pos(NodeId(ci)));
        ci = parent[ci];
    }
    points.reverse();
    Path::new(points)
}

/// Heap entry ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algorithm);
        }
    }
}
