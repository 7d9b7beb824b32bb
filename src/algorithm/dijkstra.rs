use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::SpatialGraph;
use crate::algorithm::{Path, PathFinder, SearchOutcome};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, ignoring node positions.
///
/// Kept as an exact baseline: it never consults a heuristic, so its
/// distances are the true shortest-path distances for non-negative weights.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shortest distance from `source` to every reachable node
    pub fn distances<W, G>(&self, graph: &G, source: G::Node) -> Result<HashMap<G::Node, W>>
    where
        W: Float + Debug,
        G: SpatialGraph<W>,
        G::Node: Ord,
    {
        let (distances, _) = self.search(graph, source, None)?;
        Ok(distances)
    }

    /// Runs the search, stopping early once `target` is settled.
    /// Returns the distance and predecessor maps.
    fn search<W, G>(
        &self,
        graph: &G,
        source: G::Node,
        target: Option<G::Node>,
    ) -> Result<(HashMap<G::Node, W>, HashMap<G::Node, G::Node>)>
    where
        W: Float + Debug,
        G: SpatialGraph<W>,
        G::Node: Ord,
    {
        if !graph.contains(source) {
            return Err(Error::InvalidNode(format!("{:?}", source)));
        }

        let mut distances: HashMap<G::Node, W> = HashMap::new();
        let mut predecessors: HashMap<G::Node, G::Node> = HashMap::new();

        // Distance to source is 0
        distances.insert(source, W::zero());

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((OrderedFloat(W::zero()), source)));

        // Main Dijkstra loop
        while let Some(Reverse((OrderedFloat(dist_u), u))) = queue.pop() {
            // If we've already found a shorter path to u, skip
            if let Some(&current_dist) = distances.get(&u) {
                if current_dist < dist_u {
                    continue;
                }
            }

            if Some(u) == target {
                break;
            }

            // Relax all outgoing edges
            for v in graph.neighbors(u) {
                let new_dist = dist_u + graph.edge_distance(u, v);

                let should_update = match distances.get(&v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    queue.push(Reverse((OrderedFloat(new_dist), v)));
                }
            }
        }

        Ok((distances, predecessors))
    }
}

impl<W, G> PathFinder<W, G> for Dijkstra
where
    W: Float + Debug,
    G: SpatialGraph<W>,
    G::Node: Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, start: G::Node, goal: G::Node) -> Result<SearchOutcome<G::Node, W>> {
        if !graph.contains(goal) {
            return Err(Error::InvalidNode(format!("{:?}", goal)));
        }
        if start == goal {
            return Ok(SearchOutcome::AtGoal);
        }

        let (distances, predecessors) = self.search::<W, G>(graph, start, Some(goal))?;

        let Some(&total_cost) = distances.get(&goal) else {
            return Ok(SearchOutcome::Unreachable);
        };

        let mut steps = Vec::new();
        let mut current = goal;
        while current != start {
            steps.push(current);
            match predecessors.get(&current) {
                Some(&pred) => current = pred,
                None => return Ok(SearchOutcome::Unreachable),
            }
        }
        steps.reverse();

        Ok(SearchOutcome::Found(Path::new(start, goal, steps, total_cost)))
    }
}
