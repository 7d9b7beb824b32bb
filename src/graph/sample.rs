use crate::graph::{NavGraph, Point3};
use crate::Result;

/// Labelled nodes of the sample graph with their planar coordinates
pub const SAMPLE_NODES: [(&str, f64, f64); 7] = [
    ("A", 1.0, 1.0),
    ("B", 2.0, 1.0),
    ("C", 2.0, 2.0),
    ("D", 1.0, 2.0),
    ("E", 4.0, 2.0),
    ("F", 3.0, 0.0),
    ("G", -1.0, 0.0),
];

/// Undirected edges of the sample graph, by label
pub const SAMPLE_EDGES: [(&str, &str); 8] = [
    ("A", "B"),
    ("A", "D"),
    ("A", "G"),
    ("B", "C"),
    ("B", "F"),
    ("C", "E"),
    ("C", "D"),
    ("E", "F"),
];

/// Builds the small seven node test graph.
///
/// Every edge is weighted by the Euclidean distance between its endpoints.
/// The cheapest A to E route costs exactly 4.
pub fn sample_graph() -> Result<NavGraph<f64>> {
    let mut graph = NavGraph::with_capacity(SAMPLE_NODES.len());
    for (label, x, y) in SAMPLE_NODES {
        graph.add_labeled_node(label, Point3::planar(x, y));
    }
    for (a, b) in SAMPLE_EDGES {
        let a = lookup(&graph, a)?;
        let b = lookup(&graph, b)?;
        graph.connect(a, b)?;
    }
    Ok(graph)
}

fn lookup(graph: &NavGraph<f64>, label: &str) -> Result<usize> {
    graph
        .node_by_label(label)
        .ok_or_else(|| crate::Error::InvalidNode(label.to_string()))
}
