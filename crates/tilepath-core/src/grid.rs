//! The [`TileGrid`] type, an immutable rectangular map of [`Tile`]s, and
//! the [`TileMap`] capability that searches run against.
//!
//! A `TileGrid` owns its storage. Cloning copies the tiles, and the only way
//! to obtain a modified map is [`with_overlay`](TileGrid::with_overlay),
//! which returns a fresh grid. Grids are therefore safe to share read-only
//! between threads.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// Read-only access to a rectangular tile surface.
pub trait TileMap {
    /// Whether `p` lies on the map (`0 <= x < width`, `0 <= y < height`).
    fn in_bounds(&self, p: Point) -> bool;

    /// The tile at `p`, or `None` when `p` is out of bounds.
    fn tile_at(&self, p: Point) -> Option<Tile>;
}

impl<M: TileMap + ?Sized> TileMap for &M {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        (**self).in_bounds(p)
    }

    #[inline]
    fn tile_at(&self, p: Point) -> Option<Tile> {
        (**self).tile_at(p)
    }
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// A rectangular map of tiles, at least 1x1, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    bounds: Range,
}

impl TileGrid {
    /// Build a grid from text, one row per line.
    ///
    /// Trailing whitespace is stripped from every line (so `\r\n` endings
    /// are accepted) and trailing blank lines are ignored. All remaining
    /// rows must be non-empty and of equal width.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<&str> = text.lines().map(str::trim_end).collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        Self::from_rows(rows)
    }

    /// Read and parse a map file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build a grid from in-memory rows, validating the rectangle invariant.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut width = 0usize;
        let mut height = 0usize;
        for (row, line) in rows.into_iter().enumerate() {
            let start = tiles.len();
            tiles.extend(line.as_ref().chars().map(Tile));
            let found = tiles.len() - start;
            if found == 0 {
                return Err(GridError::EmptyRow { row });
            }
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        if height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            tiles,
            bounds: Range::from_size(extent("width", width)?, extent("height", height)?),
        })
    }

    /// The bounding range of the grid, always anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// The tiles of row `y`, or `None` when `y` is out of bounds.
    pub fn row(&self, y: i32) -> Option<&[Tile]> {
        if y < 0 || y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = (y as usize) * w;
        Some(&self.tiles[start..start + w])
    }

    /// Iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width() as usize)
    }

    /// Return a copy of this grid with every in-bounds point in `points`
    /// replaced by `mark`. Out-of-bounds points are ignored.
    pub fn with_overlay<I>(&self, points: I, mark: Tile) -> TileGrid
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut copy = self.clone();
        for p in points {
            if let Some(i) = copy.index(p.into()) {
                copy.tiles[i] = mark;
            }
        }
        copy
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> TileGridIter<'_> {
        TileGridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

/// Convert a row or column count to a coordinate extent.
fn extent(axis: &'static str, len: usize) -> Result<i32, GridError> {
    i32::try_from(len).map_err(|_| GridError::TooLarge { axis, len })
}

impl TileMap for TileGrid {
    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn tile_at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for t in row {
                write!(f, "{t}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TileGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// TileGridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Tile)` pairs in a [`TileGrid`].
pub struct TileGridIter<'a> {
    grid: &'a TileGrid,
    inner: RangeIter,
}

impl Iterator for TileGridIter<'_> {
    type Item = (Point, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.index(p)?;
        Some((p, self.grid.tiles[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = (Point, Tile);
    type IntoIter = TileGridIter<'a>;

    fn into_iter(self) -> TileGridIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "1100\n1110\n0111\n0011\n";

    #[test]
    fn parse_and_lookup() {
        let g = TileGrid::parse(MAP).unwrap();
        assert_eq!(g.size(), Point::new(4, 4));
        assert_eq!(g.tile_at(Point::new(0, 0)), Some(Tile('1')));
        assert_eq!(g.tile_at(Point::new(3, 0)), Some(Tile::WALL));
        assert_eq!(g.tile_at(Point::new(3, 3)), Some(Tile('1')));
        assert_eq!(g.tile_at(Point::new(4, 0)), None);
        assert_eq!(g.tile_at(Point::new(0, -1)), None);
    }

    #[test]
    fn in_bounds_is_half_open() {
        let g = TileGrid::parse(MAP).unwrap();
        assert!(g.in_bounds(Point::new(0, 0)));
        assert!(g.in_bounds(Point::new(3, 3)));
        assert!(!g.in_bounds(Point::new(4, 3)));
        assert!(!g.in_bounds(Point::new(3, 4)));
        assert!(!g.in_bounds(Point::new(-1, 2)));
    }

    #[test]
    fn parse_strips_trailing_whitespace_and_blank_lines() {
        let g = TileGrid::parse("12 \r\n21\r\n\n\n").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.to_string(), "12\n21\n");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(TileGrid::parse(""), Err(GridError::Empty)));
        assert!(matches!(TileGrid::parse("\n\n"), Err(GridError::Empty)));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = TileGrid::parse("111\n11\n111").unwrap_err();
        match err {
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!((row, expected, found), (1, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_blank_row_in_the_middle() {
        let err = TileGrid::parse("11\n\n11").unwrap_err();
        assert!(matches!(err, GridError::EmptyRow { row: 1 }));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn extent_rejects_counts_past_i32() {
        assert_eq!(extent("width", 7).unwrap(), 7);
        assert_eq!(extent("height", i32::MAX as usize).unwrap(), i32::MAX);
        let err = extent("width", i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, GridError::TooLarge { axis: "width", .. }));
        assert!(err.to_string().contains("2147483648"));
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let g = TileGrid::parse("1é1\n111").unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.tile_at(Point::new(1, 0)), Some(Tile('é')));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = TileGrid::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
        assert!(err.to_string().contains("not/here.txt"));
    }

    #[test]
    fn display_round_trips_the_map() {
        let g: TileGrid = MAP.parse().unwrap();
        assert_eq!(g.to_string(), MAP);
    }

    #[test]
    fn overlay_copies_and_leaves_original_untouched() {
        let g = TileGrid::parse(MAP).unwrap();
        let marked = g.with_overlay(
            [Point::new(0, 0), Point::new(1, 0), Point::new(9, 9)],
            Tile::PATH_MARK,
        );
        assert_eq!(marked.to_string(), "**00\n1110\n0111\n0011\n");
        assert_eq!(g.to_string(), MAP);
    }

    #[test]
    fn rows_and_iter() {
        let g = TileGrid::parse("12\n34").unwrap();
        let rows: Vec<String> = g
            .rows()
            .map(|r| r.iter().map(|t| t.symbol()).collect())
            .collect();
        assert_eq!(rows, vec!["12", "34"]);
        assert_eq!(g.row(1).map(|r| r[0]), Some(Tile('3')));
        assert!(g.row(2).is_none());
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2], (Point::new(0, 1), Tile('3')));
    }

    #[test]
    fn tile_map_through_reference() {
        fn probe<M: TileMap>(m: M) -> Option<Tile> {
            m.tile_at(Point::new(1, 1))
        }
        let g = TileGrid::parse("12\n34").unwrap();
        assert_eq!(probe(&g), Some(Tile('4')));
    }
}
