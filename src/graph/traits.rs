use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// A position in 3D world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3<W>
where
    W: Float + Debug,
{
    pub x: W,
    pub y: W,
    pub z: W,
}

impl<W> Point3<W>
where
    W: Float + Debug,
{
    pub fn new(x: W, y: W, z: W) -> Self {
        Point3 { x, y, z }
    }

    /// A point on the z = 0 plane
    pub fn planar(x: W, y: W) -> Self {
        Point3 { x, y, z: W::zero() }
    }

    /// Straight-line distance to another point
    pub fn distance(&self, other: &Point3<W>) -> W {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Sum of absolute coordinate differences
    pub fn manhattan(&self, other: &Point3<W>) -> W {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

/// Trait representing a weighted spatial graph that can be searched.
///
/// The search only ever reads the graph, so every method takes `&self`.
/// Implementors must not hand out different answers for the same node while
/// a search borrows the graph.
pub trait SpatialGraph<W>: Debug
where
    W: Float + Debug,
{
    /// Opaque node reference. Only equality and hashing are required.
    type Node: Copy + Eq + Hash + Debug;

    /// Returns true if the node is recognized by this graph
    fn contains(&self, node: Self::Node) -> bool;

    /// Returns the number of outgoing neighbors of a node
    fn neighbor_count(&self, node: Self::Node) -> usize;

    /// Returns the i-th neighbor of a node, `index < neighbor_count(node)`
    fn neighbor(&self, node: Self::Node, index: usize) -> Self::Node;

    /// Returns the world position of a node
    fn position(&self, node: Self::Node) -> Point3<W>;

    /// Non-negative cost of moving from `from` to its neighbor `to`
    fn edge_distance(&self, from: Self::Node, to: Self::Node) -> W;

    /// Returns an iterator over the outgoing neighbors of a node
    fn neighbors(&self, node: Self::Node) -> Neighbors<'_, W, Self>
    where
        Self: Sized,
    {
        Neighbors {
            graph: self,
            node,
            index: 0,
            count: self.neighbor_count(node),
            _weight: std::marker::PhantomData,
        }
    }
}

/// Iterator over the neighbor list of a node
#[derive(Debug)]
pub struct Neighbors<'a, W, G>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
{
    graph: &'a G,
    node: G::Node,
    index: usize,
    count: usize,
    _weight: std::marker::PhantomData<W>,
}

impl<'a, W, G> Iterator for Neighbors<'a, W, G>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let next = self.graph.neighbor(self.node, self.index);
        self.index += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, W, G> ExactSizeIterator for Neighbors<'a, W, G>
where
    W: Float + Debug,
    G: SpatialGraph<W>,
{
}
