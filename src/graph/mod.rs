pub mod traits;
pub mod nav;
pub mod generators;
pub mod sample;

pub use traits::{Neighbors, Point3, SpatialGraph};
pub use nav::NavGraph;
