pub mod traits;
pub mod heuristic;
pub mod astar;
pub mod dijkstra;

pub use traits::{Path, PathFinder, SearchOutcome, SearchStats};
