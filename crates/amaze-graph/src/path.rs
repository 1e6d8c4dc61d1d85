//! The result type of a successful search.

use std::fmt;

use amaze_core::Point;

use crate::distance::manhattan;

/// An ordered, non-empty sequence of node coordinates from an entrance to
/// an exit, each consecutive pair joined by a straight corridor.
///
/// Cost is not stored: it is derived from the waypoints, so every strategy
/// reports length the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    waypoints: Vec<Point>,
}

impl Path {
    /// Wrap a reconstructed waypoint sequence.
    pub(crate) fn new(waypoints: Vec<Point>) -> Self {
        debug_assert!(!waypoints.is_empty(), "a path has at least one waypoint");
        debug_assert!(
            waypoints
                .windows(2)
                .all(|w| w[0].x == w[1].x || w[0].y == w[1].y),
            "path segments must be axis-aligned"
        );
        Self { waypoints }
    }

    /// The waypoints in order, entrance first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.waypoints
    }

    /// Number of waypoints. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of segments, i.e. `len() - 1`.
    #[inline]
    pub fn hops(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// The entrance waypoint.
    #[inline]
    pub fn first(&self) -> Point {
        self.waypoints[0]
    }

    /// The exit waypoint. Equal to [`first`](Self::first) for a single-node
    /// path.
    #[inline]
    pub fn last(&self) -> Point {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Total corridor length: the sum of Manhattan distances over
    /// consecutive waypoints. A single-node path has cost 0.
    pub fn cost(&self) -> i32 {
        self.waypoints
            .windows(2)
            .map(|w| manhattan(w[0], w[1]))
            .sum()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.waypoints.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_sums_segment_lengths() {
        let p = Path::new(vec![
            Point::new(1, 0),
            Point::new(1, 3),
            Point::new(4, 3),
            Point::new(4, 5),
        ]);
        assert_eq!(p.cost(), 3 + 3 + 2);
        assert_eq!(p.hops(), 3);
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Point::new(1, 0));
        assert_eq!(p.last(), Point::new(4, 5));
    }

    #[test]
    fn single_node_path() {
        let p = Path::new(vec![Point::new(2, 0)]);
        assert_eq!(p.cost(), 0);
        assert_eq!(p.hops(), 0);
        assert_eq!(p.first(), p.last());
    }

    #[test]
    fn display_joins_waypoints() {
        let p = Path::new(vec![Point::new(1, 0), Point::new(1, 2)]);
        assert_eq!(p.to_string(), "(1, 0) -> (1, 2)");
    }
}
