use rand::prelude::*;
use spatial_astar::graph::generators::{generate_3d_grid, generate_geometric_3d, generate_obstacle_grid};
use spatial_astar::graph::sample::{sample_graph, SAMPLE_EDGES, SAMPLE_NODES};
use spatial_astar::{Error, NavGraph, Point3, SpatialGraph};

#[test]
fn test_point_distances() {
    let a = Point3::new(1.0, 2.0, 3.0);
    let b = Point3::new(4.0, 6.0, 3.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(a.manhattan(&b), 7.0);
    assert_eq!(Point3::planar(1.0_f64, 2.0).z, 0.0);
}

#[test]
fn test_connect_is_symmetric_and_euclidean() {
    let mut graph: NavGraph<f64> = NavGraph::new();
    let a = graph.add_node(Point3::planar(0.0, 0.0));
    let b = graph.add_node(Point3::planar(3.0, 4.0));
    graph.connect(a, b).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_distance(a, b), 5.0);
    assert_eq!(graph.edge_distance(b, a), 5.0);
    assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![b]);
    assert_eq!(graph.neighbors(b).len(), 1);
}

#[test]
fn test_reconnecting_updates_instead_of_duplicating() {
    let mut graph: NavGraph<f64> = NavGraph::new();
    let a = graph.add_node(Point3::planar(0.0, 0.0));
    let b = graph.add_node(Point3::planar(1.0, 0.0));
    graph.connect(a, b).unwrap();
    graph.connect_directed_with_weight(a, b, 7.5).unwrap();

    assert_eq!(graph.neighbor_count(a), 1);
    assert_eq!(graph.edge_weight(a, b), Some(7.5));
    assert_eq!(graph.edge_weight(b, a), Some(1.0));
}

#[test]
fn test_invalid_edges_are_rejected() {
    let mut graph: NavGraph<f64> = NavGraph::new();
    let a = graph.add_node(Point3::planar(0.0, 0.0));
    let b = graph.add_node(Point3::planar(1.0, 0.0));

    assert_eq!(graph.connect(a, 5), Err(Error::InvalidNode("5".to_string())));
    assert_eq!(
        graph.connect_directed_with_weight(a, b, -1.0),
        Err(Error::NegativeWeight(-1.0))
    );
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains(2));
    assert_eq!(graph.neighbor_count(9), 0);
}

#[test]
fn test_self_loops_are_rejected() {
    let mut graph: NavGraph<f64> = NavGraph::new();
    let a = graph.add_node(Point3::planar(0.0, 0.0));

    assert_eq!(graph.connect(a, a), Err(Error::InvalidEdge("0".to_string(), "0".to_string())));
    assert_eq!(
        graph.connect_directed_with_weight(a, a, 1.0),
        Err(Error::InvalidEdge("0".to_string(), "0".to_string()))
    );
    // Unknown endpoints are reported before the loop check
    assert_eq!(graph.connect(3, 3), Err(Error::InvalidNode("3".to_string())));
    assert_eq!(graph.neighbor_count(a), 0);
}

#[test]
fn test_labels() {
    let mut graph: NavGraph<f64> = NavGraph::new();
    let home = graph.add_labeled_node("home", Point3::planar(0.0, 0.0));
    let plain = graph.add_node(Point3::planar(1.0, 1.0));

    assert_eq!(graph.node_by_label("home"), Some(home));
    assert_eq!(graph.label(home), Some("home"));
    assert_eq!(graph.label(plain), None);
    assert_eq!(graph.node_by_label("work"), None);
}

#[test]
fn test_sample_graph_layout() {
    let graph = sample_graph().unwrap();
    assert_eq!(graph.node_count(), SAMPLE_NODES.len());
    assert_eq!(graph.edge_count(), SAMPLE_EDGES.len() * 2);

    for (a, b) in SAMPLE_EDGES {
        let a = graph.node_by_label(a).unwrap();
        let b = graph.node_by_label(b).unwrap();
        assert!(graph.has_edge(a, b) && graph.has_edge(b, a));
    }

    let e = graph.node_by_label("E").unwrap();
    assert_eq!(graph.position(e), Point3::planar(4.0, 2.0));
}

#[test]
fn test_grid_generator() {
    let graph = generate_3d_grid(3, 4, 5);
    assert_eq!(graph.node_count(), 60);
    // Undirected edges along each axis, stored in both directions
    let undirected = 2 * 4 * 5 + 3 * 3 * 5 + 3 * 4 * 4;
    assert_eq!(graph.edge_count(), undirected * 2);
    // Corner node touches three neighbors
    assert_eq!(graph.neighbor_count(0), 3);
}

#[test]
fn test_random_generators_respect_geometry() {
    let mut rng = StdRng::seed_from_u64(11);

    let geometric = generate_geometric_3d(80, 0.25, &mut rng);
    assert_eq!(geometric.node_count(), 80);
    for a in 0..geometric.node_count() {
        for b in geometric.neighbors(a) {
            assert!(geometric.position(a).distance(&geometric.position(b)) <= 0.25);
        }
    }

    let grid = generate_obstacle_grid(20, 20, 0.3, &mut rng);
    assert_eq!(grid.node_count(), 400);
    for a in 0..grid.node_count() {
        for b in grid.neighbors(a) {
            let d = grid.edge_distance(a, b);
            assert!(d == 1.0 || (d - 2.0_f64.sqrt()).abs() < 1e-12);
            assert!(grid.has_edge(b, a));
        }
    }
}
