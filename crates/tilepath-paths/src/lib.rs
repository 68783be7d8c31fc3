//! Least-cost pathfinding on 4-directional tile grids.
//!
//! The search is A\* ([`astar_path`], or [`find_path`] for a
//! [`TileMap`](tilepath_core::TileMap) priced by a [`CostTable`]). Every
//! query owns its own [`AstarSearch`] state, so one grid can serve many
//! concurrent queries.
//!
//! Results distinguish "no route" from failure: an unreachable goal yields
//! an empty [`Path`], while an unpriced tile on the explored area yields
//! [`PathError::UnknownTileSymbol`].
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |
//!
//! [`GridPather`] implements all three for a tile map.

mod astar;
mod cost;
mod distance;
mod error;
mod neighbors;
mod path;
mod pather;
mod traits;

pub use astar::{AstarSearch, SearchState, astar_path, find_path};
pub use cost::CostTable;
pub use distance::manhattan;
pub use error::{CostTableError, PathError};
pub use neighbors::{CARDINAL_DIRS, Neighbors, passable_neighbors};
pub use path::{Path, reconstruct};
pub use pather::GridPather;
pub use traits::{AstarPather, Pather, WeightedPather};
