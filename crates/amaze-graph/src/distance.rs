use amaze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the exact corridor length between directly linked graph nodes,
/// since links only ever run along a single axis.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
