//! Path rendering on top of a maze raster.

use crate::geom::Point;
use crate::maze::{Cell, Maze};

impl Maze {
    /// Return a copy of this maze with the route through `waypoints` marked
    /// as [`Cell::Path`].
    ///
    /// `waypoints` is a sparse polyline: consecutive points must share a row
    /// or a column, and the whole run between them is marked inclusively,
    /// so corridors compressed out of a path reappear in the output. A
    /// single waypoint marks exactly that cell; an empty slice marks
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if two consecutive waypoints are not axis-aligned.
    pub fn render_path(&self, waypoints: &[Point]) -> Maze {
        let mut out = self.clone();
        if let Some(&first) = waypoints.first() {
            out.set(first, Cell::Path);
        }
        for pair in waypoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.x == b.x || a.y == b.y,
                "waypoints {a} and {b} are not axis-aligned"
            );
            if a.x == b.x {
                for y in a.y.min(b.y)..=a.y.max(b.y) {
                    out.set(Point::new(a.x, y), Cell::Path);
                }
            } else {
                for x in a.x.min(b.x)..=a.x.max(b.x) {
                    out.set(Point::new(x, a.y), Cell::Path);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_segment_fills_corridor() {
        let m = Maze::parse(
            "\
#.#
#.#
#.#",
        )
        .unwrap();
        let out = m.render_path(&[Point::new(1, 0), Point::new(1, 2)]);
        assert_eq!(
            out.to_string(),
            "\
#*#
#*#
#*#"
        );
        // The source maze is untouched.
        assert_eq!(m.count(Cell::Path), 0);
    }

    #[test]
    fn l_shaped_route() {
        let m = Maze::parse(
            "\
#.##
#..#
##.#",
        )
        .unwrap();
        let out = m.render_path(&[
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ]);
        assert_eq!(
            out.to_string(),
            "\
#*##
#**#
##*#"
        );
    }

    #[test]
    fn single_waypoint_marks_one_cell() {
        let m = Maze::parse(".").unwrap();
        let out = m.render_path(&[Point::new(0, 0)]);
        assert_eq!(out.to_string(), "*");
    }

    #[test]
    fn empty_waypoints_change_nothing() {
        let m = Maze::parse("..").unwrap();
        let out = m.render_path(&[]);
        assert_eq!(out, m);
    }

    #[test]
    #[should_panic(expected = "not axis-aligned")]
    fn diagonal_waypoints_panic() {
        let m = Maze::new(3, 3);
        m.render_path(&[Point::new(0, 0), Point::new(1, 1)]);
    }
}
