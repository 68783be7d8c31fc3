//! The [`Tile`] type: a single map symbol.

use std::fmt;

/// A map tile, wrapping the character that represents it in a text map.
///
/// [`Tile::WALL`] (`'0'`) is impassable. Every other symbol is passable;
/// what it costs to enter is decided by the cost table used for a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile(pub char);

impl Tile {
    /// The impassable tile.
    pub const WALL: Self = Self('0');

    /// Overlay symbol used when marking a route on a map.
    pub const PATH_MARK: Self = Self('*');

    /// Create a tile from its symbol.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    /// The tile's symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Whether the tile can be entered at all.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.0 != Self::WALL.0
    }
}

impl From<char> for Tile {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl From<Tile> for char {
    fn from(t: Tile) -> Self {
        t.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
