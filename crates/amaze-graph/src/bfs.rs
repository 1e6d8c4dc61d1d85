use std::collections::VecDeque;

use crate::node::{MazeGraph, NodeId};
use crate::path::Path;
use crate::search::{NO_PARENT, Strategy, exit_flags, reconstruct, start_node};

/// Breadth-first search over a `VecDeque`.
///
/// Expands nodes in hop-count layers, so the returned path crosses the
/// fewest edges possible. Edge costs play no part in the ordering: a path
/// with few long corridors beats one with many short ones.
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn find_path(&self, graph: &MazeGraph) -> Option<Path> {
        let start = start_node(graph)?;
        let exits = exit_flags(graph);

        let mut visited = vec![false; graph.len()];
        let mut parent = vec![NO_PARENT; graph.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start.index());

        while let Some(ci) = queue.pop_front() {
            if exits[ci] {
                return Some(reconstruct(graph, &parent, ci));
            }
            for edge in graph.node(NodeId(ci)).edges() {
                let ni = edge.to.index();
                if !visited[ni] {
                    visited[ni] = true;
                    parent[ni] = ci;
                    queue.push_back(ni);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amaze_core::{Maze, Point};

    #[test]
    fn reaches_the_fewest_hop_exit() {
        // Exits at both bottom corners; the left one is a hop closer.
        let maze = Maze::parse(
            "\
.##
...
.#.",
        )
        .unwrap();
        let g = MazeGraph::from_maze(&maze);
        let path = BreadthFirst.find_path(&g).unwrap();
        assert_eq!(
            path.points(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn hop_count_ignores_corridor_length() {
        // The staircase on the left costs 8 over 7 hops; the detour around
        // the right side costs 16 over 6 hops. Fewest hops wins here.
        let maze = Maze::parse(
            "\
#.#######
#.......#
#..####.#
##..###.#
###.###.#
###.....#
###.#####",
        )
        .unwrap();
        let g = MazeGraph::from_maze(&maze);
        let path = BreadthFirst.find_path(&g).unwrap();
        assert_eq!(
            path.points(),
            &[
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(7, 1),
                Point::new(7, 5),
                Point::new(3, 5),
                Point::new(3, 6),
            ]
        );
        assert_eq!(path.hops(), 6);
        assert_eq!(path.cost(), 16);
    }
}
