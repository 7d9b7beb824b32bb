use crate::graph::traits::{Point3, SpatialGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

/// A navigation graph using adjacency lists and dense node ids
#[derive(Debug, Clone)]
pub struct NavGraph<W>
where
    W: Float + Debug,
{
    /// World position of each node, indexed by node id
    positions: Vec<Point3<W>>,

    /// Outgoing edges for each node: node_id -> [(target_node, weight)]
    edges: Vec<Vec<(usize, W)>>,

    /// Optional human readable label of each node
    labels: Vec<Option<String>>,

    /// Reverse lookup for labelled nodes
    by_label: HashMap<String, usize>,
}

impl<W> Default for NavGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> NavGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        NavGraph {
            positions: Vec::new(),
            edges: Vec::new(),
            labels: Vec::new(),
            by_label: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        NavGraph {
            positions: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
            labels: Vec::with_capacity(nodes),
            by_label: HashMap::new(),
        }
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of directed edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|edges| edges.len()).sum()
    }

    /// Adds an unlabelled node at the given position and returns its id
    pub fn add_node(&mut self, position: Point3<W>) -> usize {
        let id = self.positions.len();
        self.positions.push(position);
        self.edges.push(Vec::new());
        self.labels.push(None);
        id
    }

    /// Adds a labelled node. Re-using a label points it at the new node.
    pub fn add_labeled_node(&mut self, label: impl Into<String>, position: Point3<W>) -> usize {
        let label = label.into();
        let id = self.add_node(position);
        self.by_label.insert(label.clone(), id);
        self.labels[id] = Some(label);
        id
    }

    /// Looks up a node by label
    pub fn node_by_label(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    /// Returns the label of a node, if it has one
    pub fn label(&self, node: usize) -> Option<&str> {
        self.labels.get(node).and_then(|label| label.as_deref())
    }

    /// Connects two distinct nodes in both directions, weighted by the
    /// straight-line distance between their positions
    pub fn connect(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_endpoints(a, b)?;
        let weight = self.positions[a].distance(&self.positions[b]);
        self.upsert_edge(a, b, weight);
        self.upsert_edge(b, a, weight);
        Ok(())
    }

    /// Adds or updates a single directed edge with an explicit weight
    pub fn connect_directed_with_weight(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_endpoints(from, to)?;
        if weight < W::zero() || weight.is_nan() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        self.upsert_edge(from, to, weight);
        Ok(())
    }

    /// Returns true if there's an edge between the two nodes
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if node < self.positions.len() {
            Ok(())
        } else {
            Err(Error::InvalidNode(node.to_string()))
        }
    }

    fn check_endpoints(&self, from: usize, to: usize) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        // Self-loops never shorten a route
        if from == to {
            return Err(Error::InvalidEdge(from.to_string(), to.to_string()));
        }
        Ok(())
    }

    fn upsert_edge(&mut self, from: usize, to: usize, weight: W) {
        let outgoing = &mut self.edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
    }
}

impl<W> SpatialGraph<W> for NavGraph<W>
where
    W: Float + Debug,
{
    type Node = usize;

    fn contains(&self, node: usize) -> bool {
        node < self.positions.len()
    }

    fn neighbor_count(&self, node: usize) -> usize {
        self.edges.get(node).map_or(0, |edges| edges.len())
    }

    fn neighbor(&self, node: usize, index: usize) -> usize {
        self.edges[node][index].0
    }

    fn position(&self, node: usize) -> Point3<W> {
        self.positions[node]
    }

    fn edge_distance(&self, from: usize, to: usize) -> W {
        // Parallel edges are collapsed by upsert_edge, so the first hit is the only one
        self.edge_weight(from, to).unwrap_or_else(W::infinity)
    }
}
