//! Spatial A* - informed shortest path search over spatial graphs
//!
//! The search runs over any graph implementing [`SpatialGraph`]: each node
//! exposes an indexable neighbor list, a 3D position and an edge distance to
//! each of its neighbors. Node positions feed a pluggable [`Heuristic`] that
//! guides the search toward the goal.
//!
//! All search state (cost map, parent map, frontier) lives inside a single
//! call, so one graph can serve any number of concurrent queries.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    astar::{find_path, AStar},
    dijkstra::Dijkstra,
    heuristic::{Euclidean, Heuristic, Manhattan, StepManhattan, ZeroHeuristic},
    Path, PathFinder, SearchOutcome, SearchStats,
};
/// Re-export main types for convenient use
pub use graph::{NavGraph, Point3, SpatialGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node reference: {0}")]
    InvalidNode(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Search gave up after expanding {0} nodes")]
    ExpansionLimitReached(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
