use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};
use tilepath_core::{Point, TileMap};

use crate::cost::CostTable;
use crate::error::PathError;
use crate::path::{Path, reconstruct};
use crate::pather::GridPather;
use crate::traits::AstarPather;

/// Frontier entry. Pops in ascending `(priority, pos)` order, so equal
/// priorities are resolved by the smaller position (`x` first, then `y`).
///
/// The priority is the sum of two `i32`s and is kept in an `i64` so it
/// never wraps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierEntry {
    priority: i64,
    pos: Point,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest entry first.
        (other.priority, other.pos).cmp(&(self.priority, self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lifecycle of an [`AstarSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// Created, nothing popped yet.
    Initialized,
    /// At least one frontier entry has been expanded.
    Expanding,
    /// The goal was popped from the frontier.
    GoalFound,
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

impl SearchState {
    /// Whether further steps can change anything.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GoalFound | Self::Exhausted)
    }
}

/// One A* query and the state it owns.
///
/// Positions are never closed: whenever a cheaper way into a position is
/// found it is pushed again, even if it was already expanded. The first
/// time the goal is popped the search stops.
pub struct AstarSearch<'p, P: ?Sized> {
    pather: &'p P,
    start: Point,
    goal: Point,
    reached: HashMap<Point, i32>,
    previous: HashMap<Point, Point>,
    frontier: BinaryHeap<FrontierEntry>,
    nbuf: Vec<Point>,
    state: SearchState,
    expansions: usize,
    pushes: usize,
}

impl<'p, P: AstarPather + ?Sized> AstarSearch<'p, P> {
    /// Prepare a search from `start` to `goal`. No work is done until
    /// [`step`](Self::step) or [`run`](Self::run) is called.
    pub fn new(pather: &'p P, start: Point, goal: Point) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: 0,
            pos: start,
        });
        Self {
            pather,
            start,
            goal,
            reached: HashMap::from([(start, 0)]),
            previous: HashMap::new(),
            frontier,
            nbuf: Vec::with_capacity(4),
            state: SearchState::Initialized,
            expansions: 0,
            pushes: 1,
        }
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Lowest cumulative cost found so far for `p`.
    #[inline]
    pub fn reached_cost(&self, p: Point) -> Option<i32> {
        self.reached.get(&p).copied()
    }

    /// Predecessor links of the cheapest routes found so far.
    #[inline]
    pub fn previous(&self) -> &HashMap<Point, Point> {
        &self.previous
    }

    /// Number of frontier entries expanded (the final goal pop excluded).
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of entries ever pushed onto the frontier, start included.
    #[inline]
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Entries still waiting on the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Pop and process one frontier entry, returning the resulting state.
    ///
    /// Once a terminal state is reached further calls are no-ops.
    pub fn step(&mut self) -> Result<SearchState, PathError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let Some(FrontierEntry { priority, pos }) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        };
        if pos == self.goal {
            self.state = SearchState::GoalFound;
            return Ok(self.state);
        }
        self.state = SearchState::Expanding;
        // Positions only enter the frontier together with a reached cost.
        let current_cost = self.reached[&pos];
        self.expansions += 1;
        trace!("expand {pos} priority={priority} cost={current_cost}");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(pos, &mut nbuf);
        let relaxed = self.relax(pos, current_cost, &nbuf);
        self.nbuf = nbuf;
        relaxed?;
        Ok(self.state)
    }

    fn relax(&mut self, pos: Point, current_cost: i32, neighbors: &[Point]) -> Result<(), PathError> {
        for &n in neighbors {
            let new_cost = current_cost
                .checked_add(self.pather.cost(pos, n)?)
                .ok_or(PathError::CostOverflow { at: n })?;
            if self.reached.get(&n).is_none_or(|&c| new_cost < c) {
                self.reached.insert(n, new_cost);
                self.previous.insert(n, pos);
                let estimate = self.pather.estimate(n, self.goal);
                let priority = i64::from(new_cost) + i64::from(estimate);
                self.frontier.push(FrontierEntry { priority, pos: n });
                self.pushes += 1;
            }
        }
        Ok(())
    }

    /// Step until the search terminates and return its result: the route
    /// when the goal was found, the empty path when it was not.
    pub fn run(&mut self) -> Result<Path, PathError> {
        while !self.step()?.is_terminal() {}
        self.path()
    }

    /// The route found so far. Empty unless the state is
    /// [`GoalFound`](SearchState::GoalFound).
    pub fn path(&self) -> Result<Path, PathError> {
        if self.state != SearchState::GoalFound {
            return Ok(Path::empty());
        }
        let steps = reconstruct(self.goal, &self.previous)?;
        let cost = self.reached[&self.goal];
        Ok(Path { steps, cost })
    }
}

/// Compute a least-cost path from `from` to `to` using A*.
///
/// Returns the full path (including both endpoints), or an empty path if
/// the goal cannot be reached. `from == to` yields the one-cell path.
pub fn astar_path<P: AstarPather + ?Sized>(
    pather: &P,
    from: Point,
    to: Point,
) -> Result<Path, PathError> {
    let mut search = AstarSearch::new(pather, from, to);
    let result = search.run();
    debug!(
        "astar {from} -> {to}: {:?} after {} expansions, {} pushes",
        search.state(),
        search.expansions(),
        search.pushes()
    );
    result
}

/// [`astar_path`] over a tile map priced by `costs`.
pub fn find_path<M: TileMap + ?Sized>(
    map: &M,
    costs: &CostTable,
    from: Point,
    to: Point,
) -> Result<Path, PathError> {
    astar_path(&GridPather::new(map, costs), from, to)
}
