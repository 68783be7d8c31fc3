//! **tilepath-core**: tile grid types for the *tilepath* workspace.
//!
//! This crate provides the data model the search runs on: geometry
//! primitives, the [`Tile`] symbol, the immutable [`TileGrid`] with its text
//! loader and printer, and the [`TileMap`] capability trait.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{TileGrid, TileMap};
pub use tile::Tile;
