use crate::node::{MazeGraph, NodeId};
use crate::path::Path;
use crate::search::{NO_PARENT, Strategy, exit_flags, reconstruct, start_node};

/// Depth-first search with an explicit stack.
///
/// Descends into one neighbor fully before backtracking, so the returned
/// path can be arbitrarily longer than optimal. Cheap and sufficient when
/// any route will do.
pub struct DepthFirst;

impl Strategy for DepthFirst {
    fn find_path(&self, graph: &MazeGraph) -> Option<Path> {
        let start = start_node(graph)?;
        let exits = exit_flags(graph);

        let mut visited = vec![false; graph.len()];
        let mut parent = vec![NO_PARENT; graph.len()];
        let mut stack = vec![start.index()];
        visited[start.index()] = true;

        while let Some(ci) = stack.pop() {
            if exits[ci] {
                return Some(reconstruct(graph, &parent, ci));
            }
            for edge in graph.node(NodeId(ci)).edges() {
                let ni = edge.to.index();
                if !visited[ni] {
                    visited[ni] = true;
                    parent[ni] = ci;
                    stack.push(ni);
                }
            }
        }
        None
    }
}
