use std::fmt::Debug;
use num_traits::Float;
use crate::graph::SpatialGraph;
use crate::Result;

/// A route found by a search.
///
/// The start node is kept alongside the route but is not one of its steps:
/// `steps()` begins with the first node after start and ends with the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N, W>
where
    N: Copy + Debug,
    W: Float + Debug,
{
    start: N,
    goal: N,
    steps: Vec<N>,
    total_cost: W,
}

impl<N, W> Path<N, W>
where
    N: Copy + Debug,
    W: Float + Debug,
{
    pub(crate) fn new(start: N, goal: N, steps: Vec<N>, total_cost: W) -> Self {
        Path {
            start,
            goal,
            steps,
            total_cost,
        }
    }

    /// The node the search started from (not part of `steps`)
    pub fn start(&self) -> N {
        self.start
    }

    /// The node the search was heading for, always the last step
    pub fn goal(&self) -> N {
        self.goal
    }

    /// Nodes after start, in travel order
    pub fn steps(&self) -> &[N] {
        &self.steps
    }

    /// Number of steps (start excluded)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// False for any path returned by a search
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of edge distances along the route
    pub fn total_cost(&self) -> W {
        self.total_cost
    }

    /// Iterates the whole route, start included
    pub fn iter_with_start(&self) -> impl Iterator<Item = N> + '_ {
        std::iter::once(self.start).chain(self.steps.iter().copied())
    }

    /// Consumes the path, returning its steps
    pub fn into_steps(self) -> Vec<N> {
        self.steps
    }
}

/// What a search concluded
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<N, W>
where
    N: Copy + Debug,
    W: Float + Debug,
{
    /// A route from start to goal
    Found(Path<N, W>),
    /// Start and goal are the same node, nothing to travel
    AtGoal,
    /// The frontier ran dry before reaching the goal
    Unreachable,
}

impl<N, W> SearchOutcome<N, W>
where
    N: Copy + Debug,
    W: Float + Debug,
{
    /// Returns the route if one was found
    pub fn path(&self) -> Option<&Path<N, W>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the route if one was found
    pub fn into_path(self) -> Option<Path<N, W>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// True for `Found` and `AtGoal`
    pub fn is_success(&self) -> bool {
        !matches!(self, SearchOutcome::Unreachable)
    }

    /// Cost to reach the goal: zero when already there, `None` when unreachable
    pub fn cost(&self) -> Option<W> {
        match self {
            SearchOutcome::Found(path) => Some(path.total_cost()),
            SearchOutcome::AtGoal => Some(W::zero()),
            SearchOutcome::Unreachable => None,
        }
    }
}

/// Counters collected while a search runs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and relaxed
    pub expanded: usize,
    /// Entries pushed onto the frontier, start included
    pub pushed: usize,
    /// Expansions of an entry whose queued priority was already superseded
    pub stale: usize,
    /// Largest frontier size seen
    pub peak_frontier: usize,
}

/// Trait for point-to-point shortest path searches
pub trait PathFinder<W, G>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
{
    /// Search for a route from `start` to `goal`
    fn find_path(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<SearchOutcome<G::Node, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
