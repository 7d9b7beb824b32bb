use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::heuristic::{Heuristic, Manhattan};
use crate::algorithm::{Path, PathFinder, SearchOutcome, SearchStats};
use crate::data_structures::Frontier;
use crate::graph::SpatialGraph;
use crate::{Error, Result};

/// Finds a route from `start` to `goal` with the default A* configuration
/// (Manhattan heuristic, no expansion limit).
pub fn find_path<W, G>(graph: &G, start: G::Node, goal: G::Node) -> Result<SearchOutcome<G::Node, W>>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
{
    AStar::new().find_path(graph, start, goal)
}

/// A* point-to-point search.
///
/// The frontier never removes superseded entries. When one of them is
/// expanded, relaxation reads the cost map rather than the queued priority,
/// so none of its neighbors improve and the expansion is wasted work only.
///
/// Every call owns its cost map, parent map and frontier, so one `AStar`
/// can serve concurrent searches over a shared graph.
#[derive(Debug, Clone)]
pub struct AStar<H = Manhattan> {
    /// Estimate of the remaining cost to the goal
    heuristic: H,
    /// Maximum number of expansions before giving up (None = unbounded)
    expansion_limit: Option<usize>,
    /// Initial capacity of the per-search maps and frontier
    capacity_hint: usize,
}

impl Default for AStar<Manhattan> {
    fn default() -> Self {
        Self::new()
    }
}

impl AStar<Manhattan> {
    /// Creates a new A* searcher using the Manhattan heuristic
    pub fn new() -> Self {
        AStar {
            heuristic: Manhattan,
            expansion_limit: None,
            capacity_hint: 64,
        }
    }
}

impl<H> AStar<H> {
    /// Swap the heuristic, keeping the other settings
    pub fn with_heuristic<H2>(self, heuristic: H2) -> AStar<H2> {
        AStar {
            heuristic,
            expansion_limit: self.expansion_limit,
            capacity_hint: self.capacity_hint,
        }
    }

    /// Give up with `Error::ExpansionLimitReached` after this many expansions
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    /// Pre-size the per-search structures for roughly this many visited nodes
    pub fn with_capacity_hint(mut self, nodes: usize) -> Self {
        self.capacity_hint = nodes;
        self
    }

    /// The heuristic this searcher queues neighbors with
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The configured expansion limit, if any
    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    /// Search for a route from `start` to `goal`
    pub fn find_path<W, G>(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<SearchOutcome<G::Node, W>>
    where
        W: Float + Debug,
        G: SpatialGraph<W>,
        H: Heuristic<W>,
    {
        self.find_path_with_stats(graph, start, goal)
            .map(|(outcome, _)| outcome)
    }

    /// Search for a route and report how much work the search did
    pub fn find_path_with_stats<W, G>(
        &self,
        graph: &G,
        start: G::Node,
        goal: G::Node,
    ) -> Result<(SearchOutcome<G::Node, W>, SearchStats)>
    where
        W: Float + Debug,
        G: SpatialGraph<W>,
        H: Heuristic<W>,
    {
        if !graph.contains(start) {
            return Err(Error::InvalidNode(format!("{:?}", start)));
        }
        if !graph.contains(goal) {
            return Err(Error::InvalidNode(format!("{:?}", goal)));
        }

        let mut stats = SearchStats::default();

        if start == goal {
            debug!("A* {:?} -> {:?}: start is the goal", start, goal);
            return Ok((SearchOutcome::AtGoal, stats));
        }

        let goal_position = graph.position(goal);

        // Absent entry = not reached yet
        let mut cost_so_far: HashMap<G::Node, W> = HashMap::with_capacity(self.capacity_hint);
        let mut came_from: HashMap<G::Node, G::Node> = HashMap::with_capacity(self.capacity_hint);
        let mut frontier: Frontier<G::Node, W> = Frontier::with_capacity(self.capacity_hint);

        cost_so_far.insert(start, W::zero());
        frontier.push(start, W::zero());
        stats.pushed = 1;
        stats.peak_frontier = 1;

        let mut reached = false;

        while let Some(current) = frontier.peek_min() {
            // The goal is accepted on sight and never expanded
            if current == goal {
                reached = true;
                break;
            }

            if let Some(limit) = self.expansion_limit {
                if stats.expanded >= limit {
                    debug!(
                        "A* {:?} -> {:?}: hit expansion limit {} with {} queued",
                        start,
                        goal,
                        limit,
                        frontier.len()
                    );
                    return Err(Error::ExpansionLimitReached(limit));
                }
            }

            let Some((_, queued)) = frontier.extract_min() else {
                break;
            };
            let Some(current_cost) = cost_so_far.get(&current).copied() else {
                continue;
            };
            stats.expanded += 1;

            let current_position = graph.position(current);

            // came_from[current] is written together with cost_so_far[current],
            // so the priority of the live entry can be recomputed exactly
            if let Some(&parent) = came_from.get(&current) {
                let expected = current_cost
                    + self
                        .heuristic
                        .estimate(&current_position, &graph.position(parent), &goal_position);
                if queued > expected {
                    stats.stale += 1;
                }
            }

            trace!("expand {:?} g={:?} f={:?}", current, current_cost, queued);

            for next in graph.neighbors(current) {
                let new_cost = current_cost + graph.edge_distance(current, next);

                let improves = match cost_so_far.get(&next) {
                    None => true,
                    Some(&known) => new_cost < known,
                };

                if improves {
                    cost_so_far.insert(next, new_cost);
                    came_from.insert(next, current);

                    let priority = new_cost
                        + self
                            .heuristic
                            .estimate(&graph.position(next), &current_position, &goal_position);
                    frontier.push(next, priority);
                    stats.pushed += 1;
                }
            }

            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        if !reached {
            debug!(
                "A* {:?} -> {:?}: unreachable after {} expansions",
                start, goal, stats.expanded
            );
            return Ok((SearchOutcome::Unreachable, stats));
        }

        let steps = reconstruct_path(&came_from, goal);
        let total_cost = cost_so_far.get(&goal).copied().unwrap_or_else(W::zero);

        debug!(
            "A* {:?} -> {:?}: {} steps, cost {:?}, {} expansions ({} stale), {} pushes",
            start,
            goal,
            steps.len(),
            total_cost,
            stats.expanded,
            stats.stale,
            stats.pushed
        );

        Ok((SearchOutcome::Found(Path::new(start, goal, steps, total_cost)), stats))
    }
}

/// Walks the parent map back from `goal` until a node without a parent
/// (the start, which is left out) and returns the nodes in travel order.
fn reconstruct_path<N>(came_from: &HashMap<N, N>, goal: N) -> Vec<N>
where
    N: Copy + Eq + Hash,
{
    let mut steps = Vec::new();
    let mut node = goal;

    while let Some(&parent) = came_from.get(&node) {
        steps.push(node);
        node = parent;
    }

    steps.reverse();
    steps
}

impl<W, G, H> PathFinder<W, G> for AStar<H>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
    H: Heuristic<W>,
{
    fn find_path(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<SearchOutcome<G::Node, W>> {
        AStar::find_path(self, graph, start, goal)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
