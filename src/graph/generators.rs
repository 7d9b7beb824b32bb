use crate::graph::{NavGraph, Point3, SpatialGraph};
use rand::Rng;

/// Generates a 3D grid graph with dimensions x*y*z and unit spacing.
///
/// Nodes are numbered `i * y * z + j * z + k` and connected to their six
/// axis-aligned neighbors with unit weight.
pub fn generate_3d_grid(x: usize, y: usize, z: usize) -> NavGraph<f64> {
    let mut graph = NavGraph::with_capacity(x * y * z);

    // Helper function to get node index from 3D coordinates
    let get_index = |i: usize, j: usize, k: usize| -> usize { i * y * z + j * z + k };

    for i in 0..x {
        for j in 0..y {
            for k in 0..z {
                graph.add_node(Point3::new(i as f64, j as f64, k as f64));
            }
        }
    }

    // connect() is symmetric, so only look forward along each axis
    for i in 0..x {
        for j in 0..y {
            for k in 0..z {
                let current = get_index(i, j, k);
                if i + 1 < x {
                    connect_existing(&mut graph, current, get_index(i + 1, j, k));
                }
                if j + 1 < y {
                    connect_existing(&mut graph, current, get_index(i, j + 1, k));
                }
                if k + 1 < z {
                    connect_existing(&mut graph, current, get_index(i, j, k + 1));
                }
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit cube.
/// n: number of nodes
/// r: connection radius (nodes within distance r are connected)
pub fn generate_geometric_3d<R: Rng + ?Sized>(n: usize, r: f64, rng: &mut R) -> NavGraph<f64> {
    let mut graph = NavGraph::with_capacity(n);

    for _ in 0..n {
        let x = rng.gen_range(0.0..1.0);
        let y = rng.gen_range(0.0..1.0);
        let z = rng.gen_range(0.0..1.0);
        graph.add_node(Point3::new(x, y, z));
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if graph.position(i).distance(&graph.position(j)) <= r {
                connect_existing(&mut graph, i, j);
            }
        }
    }

    graph
}

/// Generates a planar grid of width*height nodes where each node is dropped
/// with probability `blocked`. Surviving nodes connect to their 8 surrounding
/// cells, so the grid contains diagonal moves with cost sqrt(2).
pub fn generate_obstacle_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    blocked: f64,
    rng: &mut R,
) -> NavGraph<f64> {
    let mut graph = NavGraph::with_capacity(width * height);
    let mut walkable = vec![false; width * height];

    for y in 0..height {
        for x in 0..width {
            graph.add_node(Point3::planar(x as f64, y as f64));
            walkable[y * width + x] = !rng.gen_bool(blocked.clamp(0.0, 1.0));
        }
    }

    // Forward half of the 8-neighborhood; connect() adds the reverse edge
    let directions: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            if !walkable[node] {
                continue;
            }
            for (dx, dy) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let neighbor = ny as usize * width + nx as usize;
                if walkable[neighbor] {
                    connect_existing(&mut graph, node, neighbor);
                }
            }
        }
    }

    graph
}

fn connect_existing(graph: &mut NavGraph<f64>, a: usize, b: usize) {
    // Both ids come from add_node above
    if let Err(err) = graph.connect(a, b) {
        log::warn!("skipping edge {} -> {}: {}", a, b, err);
    }
}
