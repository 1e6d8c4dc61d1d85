use std::collections::BinaryHeap;

use crate::node::{MazeGraph, NodeId};
use crate::path::Path;
use crate::search::{
    HeapEntry, NO_PARENT, Strategy, UNREACHABLE, exit_flags, reconstruct, start_node,
};

/// Dijkstra's algorithm over a binary heap.
///
/// Expands nodes in order of cumulative corridor distance from the start,
/// so the first exit popped closes the cheapest route to any exit. Stale
/// heap entries are skipped via the open flags.
pub struct Dijkstra;

impl Strategy for Dijkstra {
    fn find_path(&self, graph: &MazeGraph) -> Option<Path> {
        let start = start_node(graph)?;
        let exits = exit_flags(graph);

        let n = graph.len();
        let mut dist = vec![UNREACHABLE; n];
        let mut parent = vec![NO_PARENT; n];
        let mut open = vec![false; n];
        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();

        let si = start.index();
        dist[si] = 0;
        open[si] = true;
        heap.push(HeapEntry { idx: si, f: 0 });

        while let Some(current) = heap.pop() {
            let ci = current.idx;
            if !open[ci] {
                continue;
            }
            open[ci] = false;

            if exits[ci] {
                return Some(reconstruct(graph, &parent, ci));
            }

            let d = dist[ci];
            for edge in graph.node(NodeId(ci)).edges() {
                let ni = edge.to.index();
                let nd = d + edge.cost;
                if nd < dist[ni] {
                    dist[ni] = nd;
                    parent[ni] = ci;
                    open[ni] = true;
                    heap.push(HeapEntry { idx: ni, f: nd });
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
    fn takes_the_shorter_of_two_routes() {
        // Straight down column 1 costs 4; the loop over column 3 costs 8.
        let maze = Maze::parse(
            "\
#.###
#...#
#.#.#
#...#
#.###",
        )
        .unwrap();
        let g = MazeGraph::from_maze(&maze);
        let path = Dijkstra.find_path(&g).unwrap();
        assert_eq!(
            path.points(),
            &[
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 3),
                Point::new(1, 4),
            ]
        );
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn reaches_the_nearest_exit() {
        // Both bottom corners are exits; the left one is 2 cells away, the
        // right one 4.
        let maze = Maze::parse(
            "\
.##
...
.#.",
        )
        .unwrap();
        let g = MazeGraph::from_maze(&maze);
        let path = Dijkstra.find_path(&g).unwrap();
        assert_eq!(
            path.points(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(path.cost(), 2);
    }
}
