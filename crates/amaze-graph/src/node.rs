//! The sparse maze graph: nodes at topological features, edges along
//! corridors.

use std::fmt;

use amaze_core::Point;

use crate::distance::manhattan;

/// Index of a node inside its [`MazeGraph`] arena.
///
/// Ids are only meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The underlying arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An undirected link to another node, stored once per direction.
///
/// `cost` is the Manhattan distance between the two endpoints, which equals
/// the corridor length because links only ever run along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub cost: i32,
}

/// A graph vertex placed at a topologically significant passage cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) pos: Point,
    pub(crate) edges: Vec<Edge>,
}

impl Node {
    /// The cell this node sits on.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Outgoing links. The mirror link exists on every target node.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// ---------------------------------------------------------------------------
// MazeGraph
// ---------------------------------------------------------------------------

/// Arena owning every node compiled from one maze.
///
/// Produced by [`from_maze`](MazeGraph::from_maze) and immutable afterwards.
/// Entrance candidates are the row-0 passage cells, exit candidates the
/// bottom-row passage cells, both in ascending column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) entrances: Vec<NodeId>,
    pub(crate) exits: Vec<NodeId>,
}

impl MazeGraph {
    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` comes from a different graph and is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The coordinate of `id`'s cell.
    #[inline]
    pub fn pos(&self, id: NodeId) -> Point {
        self.nodes[id.0].pos
    }

    /// Iterate over all nodes with their ids, in creation (scan) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Entrance candidates (row-0 nodes) in scan order.
    #[inline]
    pub fn entrances(&self) -> &[NodeId] {
        &self.entrances
    }

    /// Exit candidates (bottom-row nodes) in scan order.
    #[inline]
    pub fn exits(&self) -> &[NodeId] {
        &self.exits
    }

    /// Find the node sitting on `p`, if any.
    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.pos == p).map(NodeId)
    }

    /// Append a node with no links yet and return its id.
    pub(crate) fn add_node(&mut self, pos: Point) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            pos,
            edges: Vec::new(),
        });
        id
    }

    /// Create the undirected link between `a` and `b`, one edge in each
    /// direction.
    ///
    /// The endpoints must share an axis; the edge cost is their Manhattan
    /// distance, i.e. the corridor length.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) {
        let (pa, pb) = (self.nodes[a.0].pos, self.nodes[b.0].pos);
        debug_assert!(
            pa.x == pb.x || pa.y == pb.y,
            "link {pa} - {pb} is not axis-aligned"
        );
        let cost = manhattan(pa, pb);
        self.nodes[a.0].edges.push(Edge { to: b, cost });
        self.nodes[b.0].edges.push(Edge { to: a, cost });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_symmetric_with_equal_cost() {
        let mut g = MazeGraph::default();
        let a = g.add_node(Point::new(2, 0));
        let b = g.add_node(Point::new(2, 4));
        g.link(a, b);

        assert_eq!(g.node(a).edges(), &[Edge { to: b, cost: 4 }]);
        assert_eq!(g.node(b).edges(), &[Edge { to: a, cost: 4 }]);
    }

    #[test]
    fn node_at_finds_by_coordinate() {
        let mut g = MazeGraph::default();
        let a = g.add_node(Point::new(1, 0));
        let b = g.add_node(Point::new(3, 0));

        assert_eq!(g.node_at(Point::new(1, 0)), Some(a));
        assert_eq!(g.node_at(Point::new(3, 0)), Some(b));
        assert_eq!(g.node_at(Point::new(2, 2)), None);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn iter_follows_creation_order() {
        let mut g = MazeGraph::default();
        g.add_node(Point::new(0, 0));
        g.add_node(Point::new(5, 0));
        let ids: Vec<usize> = g.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let mut g = MazeGraph::default();
        let a = g.add_node(Point::new(1, 0));
        let b = g.add_node(Point::new(1, 2));
        g.link(a, b);
        g.entrances.push(a);
        g.exits.push(b);

        let json = serde_json::to_string(&g).unwrap();
        let back: MazeGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
