use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Point3;

/// Estimate added to a neighbor's cost when it is queued.
///
/// `next` is the neighbor being queued, `current` the node whose expansion
/// reached it, and `goal` the search target. A* only guarantees the cheapest
/// path when the estimate never exceeds the true remaining cost from `next`
/// (an admissible heuristic).
pub trait Heuristic<W>
where
    W: Float + Debug,
{
    fn estimate(&self, next: &Point3<W>, current: &Point3<W>, goal: &Point3<W>) -> W;
}

/// Sum of absolute coordinate differences between the neighbor and the goal.
///
/// This is the default. It may overestimate when edges are weighted by
/// straight-line distance, so it trades optimality for fewer expansions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

impl<W: Float + Debug> Heuristic<W> for Manhattan {
    fn estimate(&self, next: &Point3<W>, _current: &Point3<W>, goal: &Point3<W>) -> W {
        next.manhattan(goal)
    }
}

/// Sum of absolute coordinate differences between the neighbor and the node
/// being expanded.
///
/// Ignores the goal entirely, so the term is a per-step penalty rather than a
/// remaining-cost estimate. Matches the classic scripted navigation search.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepManhattan;

impl<W: Float + Debug> Heuristic<W> for StepManhattan {
    fn estimate(&self, next: &Point3<W>, current: &Point3<W>, _goal: &Point3<W>) -> W {
        next.manhattan(current)
    }
}

/// Straight-line distance to the goal, admissible whenever edge costs are at
/// least the distance between their endpoints
#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl<W: Float + Debug> Heuristic<W> for Euclidean {
    fn estimate(&self, next: &Point3<W>, _current: &Point3<W>, goal: &Point3<W>) -> W {
        next.distance(goal)
    }
}

/// Always zero; turns A* into Dijkstra's algorithm
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl<W: Float + Debug> Heuristic<W> for ZeroHeuristic {
    fn estimate(&self, _next: &Point3<W>, _current: &Point3<W>, _goal: &Point3<W>) -> W {
        W::zero()
    }
}

impl<W, F> Heuristic<W> for F
where
    W: Float + Debug,
    F: Fn(&Point3<W>, &Point3<W>, &Point3<W>) -> W,
{
    fn estimate(&self, next: &Point3<W>, current: &Point3<W>, goal: &Point3<W>) -> W {
        self(next, current, goal)
    }
}
