//! Search results and predecessor-chain reconstruction.

use std::collections::HashMap;

use log::warn;
use tilepath_core::Point;

use crate::error::PathError;

/// An ordered route from start to goal, both inclusive, with its total cost.
///
/// The cost counts every entered cell, so it excludes the start. An empty
/// path means no route exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: Vec<Point>,
    pub cost: i32,
}

impl Path {
    /// The "no route" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no route was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of cells on the route, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// First cell of the route.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    /// Last cell of the route.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// The route's cells.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.steps
    }

    /// Iterator over the route's cells, start first.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.steps.iter().copied()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk predecessor links back from `goal` and return the route in
/// start-to-goal order.
///
/// The start is the first position without a predecessor. A chain longer
/// than `previous.len() + 1` positions can only come from a cycle and is
/// reported as [`PathError::MalformedPredecessorChain`].
pub fn reconstruct(goal: Point, previous: &HashMap<Point, Point>) -> Result<Vec<Point>, PathError> {
    let mut steps = vec![goal];
    let mut current = goal;
    while let Some(&prev) = previous.get(&current) {
        if steps.len() > previous.len() {
            warn!(
                "predecessor chain from {goal} exceeded {} links",
                previous.len()
            );
            return Err(PathError::MalformedPredecessorChain {
                goal,
                steps: steps.len(),
            });
        }
        steps.push(prev);
        current = prev;
    }
    steps.reverse();
    Ok(steps)
}
