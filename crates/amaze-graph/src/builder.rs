//! Compilation of a maze raster into a [`MazeGraph`].

use amaze_core::{Maze, Point};

use crate::node::{MazeGraph, NodeId};

impl MazeGraph {
    /// Compile `maze` into a sparse graph of junctions, turns, dead ends
    /// and boundary openings.
    ///
    /// A single row-major scan. Every passage cell of the first row becomes
    /// an entrance-candidate node and every passage cell of the last row an
    /// exit-candidate node, regardless of its surroundings (for a one-row
    /// maze each cell is both). An interior passage cell becomes a node
    /// unless it merely continues a straight corridor: left and right open
    /// with top and bottom blocked, or the transpose. Straight runs are
    /// thereby compressed into single edges between the nodes at their
    /// ends.
    ///
    /// A new node is linked to the most recent node in its row iff the cell
    /// immediately to its left is open, and to the most recent node in its
    /// column iff the cell immediately above is open. An open adjacent cell
    /// guarantees an uninterrupted corridor back to that tracked node, so
    /// every edge stands for a full straight corridor and its cost equals
    /// the corridor length. Boundary-row nodes are never linked to each
    /// other horizontally.
    ///
    /// The scan is deterministic: the same maze always yields the same
    /// nodes in the same order with the same links.
    pub fn from_maze(maze: &Maze) -> Self {
        let (w, h) = (maze.width(), maze.height());
        let mut graph = MazeGraph::default();
        if w == 0 || h == 0 {
            return graph;
        }

        // Most recent node seen in each column; row_node is its per-row
        // counterpart, reset at every row start.
        let mut col_nodes: Vec<Option<NodeId>> = vec![None; w as usize];

        for y in 0..h {
            let top = y == 0;
            let bottom = y == h - 1;
            let mut row_node: Option<NodeId> = None;

            for x in 0..w {
                let p = Point::new(x, y);
                if !maze.is_passage(p) {
                    continue;
                }

                let left = maze.is_passage(Point::new(x - 1, y));
                let up = maze.is_passage(Point::new(x, y - 1));

                if !top && !bottom {
                    let right = maze.is_passage(Point::new(x + 1, y));
                    let down = maze.is_passage(Point::new(x, y + 1));
                    let straight = (left && right && !up && !down)
                        || (up && down && !left && !right);
                    if straight {
                        continue;
                    }
                }

                let id = graph.add_node(p);
                if top {
                    graph.entrances.push(id);
                }
                if bottom {
                    graph.exits.push(id);
                }

                if !top && !bottom && left {
                    if let Some(prev) = row_node {
                        graph.link(prev, id);
                    }
                }
                if !top && up {
                    if let Some(prev) = col_nodes[x as usize] {
                        graph.link(prev, id);
                    }
                }

                row_node = Some(id);
                col_nodes[x as usize] = Some(id);
            }
        }

        graph
    }
}
