//! Error types for cost tables and searches.

use thiserror::Error;
use tilepath_core::{Point, Tile};

/// A search that could not produce an answer.
///
/// "No route exists" is not an error: it is reported as an empty
/// [`Path`](crate::Path).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no cost is defined for tile '{tile}' at {at}")]
    UnknownTileSymbol { tile: Tile, at: Point },
    #[error("route cost into {at} exceeds {}", i32::MAX)]
    CostOverflow { at: Point },
    #[error("predecessor chain from {goal} did not reach a start after {steps} steps")]
    MalformedPredecessorChain { goal: Point, steps: usize },
}

/// An invalid entry in a [`CostTable`](crate::CostTable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostTableError {
    #[error("tile '{tile}' has cost {cost}, costs must be positive")]
    NonPositiveCost { tile: Tile, cost: i32 },
    #[error("tile '{0}' is impassable and cannot be given a cost")]
    ImpassableSymbol(Tile),
}
