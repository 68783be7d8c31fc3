//! Errors raised while building a [`TileGrid`](crate::TileGrid).

use std::path::PathBuf;

use thiserror::Error;

/// A grid source that does not describe a valid rectangular map.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map {axis} of {len} cells does not fit in a coordinate")]
    TooLarge { axis: &'static str, len: usize },
    #[error("failed to read map file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
