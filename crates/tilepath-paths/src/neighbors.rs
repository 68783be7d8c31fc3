use tilepath_core::{Point, TileMap};

/// Orthogonal step directions in expansion order: right, left, down, up.
pub const CARDINAL_DIRS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Append the traversable orthogonal neighbors of `p` into `buf`.
///
/// A neighbor is kept when it is on the map and its tile is passable.
/// Directions are tried in [`CARDINAL_DIRS`] order. A `p` that is itself off
/// the map has no neighbors; this is a normal empty result, not an error.
pub fn passable_neighbors<M: TileMap + ?Sized>(map: &M, p: Point, buf: &mut Vec<Point>) {
    if !map.in_bounds(p) {
        return;
    }
    for d in CARDINAL_DIRS {
        let n = p + d;
        if map.tile_at(n).is_some_and(|t| t.is_passable()) {
            buf.push(n);
        }
    }
}

/// Cached neighbor computation helper.
///
/// Owns a small buffer so repeated queries do not allocate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Traversable neighbors of `p` on `map`, as in [`passable_neighbors`].
    pub fn passable<M: TileMap + ?Sized>(&mut self, map: &M, p: Point) -> &[Point] {
        self.buf.clear();
        passable_neighbors(map, p, &mut self.buf);
        &self.buf
    }
}
