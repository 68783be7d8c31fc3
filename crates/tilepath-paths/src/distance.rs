use tilepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible for 4-directional movement whenever every step costs at
/// least 1. Distances beyond `i32::MAX` saturate, which keeps the estimate
/// admissible.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = u64::from(a.x.abs_diff(b.x)) + u64::from(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}
