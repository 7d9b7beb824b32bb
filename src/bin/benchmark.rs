use std::env;
use std::time::{Duration, Instant};
use rand::prelude::*;
use rayon::prelude::*;
use spatial_astar::graph::generators::{generate_3d_grid, generate_geometric_3d, generate_obstacle_grid};
use spatial_astar::{AStar, Dijkstra, Euclidean, NavGraph, PathFinder, SearchOutcome};

/// Benchmark settings, overridable from the command line
#[derive(Debug, Clone)]
struct BenchConfig {
    /// Random start/goal pairs per graph
    queries: usize,
    /// RNG seed for graph generation and query selection
    seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            queries: 200,
            seed: 42,
        }
    }
}

// Function to benchmark a path finder over a batch of queries
fn benchmark_algorithm<A>(algorithm: &A, graph: &NavGraph<f64>, queries: &[(usize, usize)]) -> (Duration, usize)
where
    A: PathFinder<f64, NavGraph<f64>>,
{
    let start = Instant::now();
    let mut found = 0;
    for &(from, to) in queries {
        match algorithm.find_path(graph, from, to) {
            Ok(SearchOutcome::Found(_)) | Ok(SearchOutcome::AtGoal) => found += 1,
            Ok(SearchOutcome::Unreachable) => {}
            Err(err) => log::warn!("{} failed on {} -> {}: {}", algorithm.name(), from, to, err),
        }
    }
    (start.elapsed(), found)
}

fn random_queries(graph: &NavGraph<f64>, count: usize, rng: &mut StdRng) -> Vec<(usize, usize)> {
    let n = graph.node_count();
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = BenchConfig::default();
    if let Some(queries) = args.get(1).and_then(|arg| arg.parse().ok()) {
        config.queries = queries;
    }
    if let Some(seed) = args.get(2).and_then(|arg| arg.parse().ok()) {
        config.seed = seed;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let graphs: Vec<(&str, NavGraph<f64>)> = vec![
        ("grid 20x20x20", generate_3d_grid(20, 20, 20)),
        ("obstacle grid 200x200", generate_obstacle_grid(200, 200, 0.25, &mut rng)),
        ("geometric 3000", generate_geometric_3d(3_000, 0.08, &mut rng)),
    ];

    println!("=====================================================");
    println!("Benchmark: A* vs Dijkstra ({} queries per graph)", config.queries);
    println!("=====================================================");

    let astar = AStar::new();
    let astar_euclidean = AStar::new().with_heuristic(Euclidean);
    let dijkstra = Dijkstra::new();

    let mut results = Vec::new();

    for (name, graph) in &graphs {
        println!("\n{}: {} nodes, {} edges", name, graph.node_count(), graph.edge_count());
        let queries = random_queries(graph, config.queries, &mut rng);

        let (astar_time, astar_found) = benchmark_algorithm(&astar, graph, &queries);
        let (euclid_time, _) = benchmark_algorithm(&astar_euclidean, graph, &queries);
        let (dijkstra_time, dijkstra_found) = benchmark_algorithm(&dijkstra, graph, &queries);

        if astar_found != dijkstra_found {
            println!("  WARNING: A* reached {} goals, Dijkstra {}", astar_found, dijkstra_found);
        }

        // Same queries again, spread across threads sharing the graph
        let parallel_start = Instant::now();
        let parallel_found = queries
            .par_iter()
            .filter(|&&(from, to)| {
                matches!(astar.find_path(graph, from, to), Ok(outcome) if outcome.is_success())
            })
            .count();
        let parallel_time = parallel_start.elapsed();

        println!("  - A* (manhattan): {:?}, {} reachable", astar_time, astar_found);
        println!("  - A* (euclidean): {:?}", euclid_time);
        println!("  - Dijkstra:       {:?}, {} reachable", dijkstra_time, dijkstra_found);
        println!("  - A* parallel:    {:?}, {} reachable", parallel_time, parallel_found);

        results.push((*name, astar_time, euclid_time, dijkstra_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<24} | {:<12} | {:<12} | {:<12} | {:<12}",
        "Graph", "A* (ms)", "A* eucl (ms)", "Dijkstra (ms)", "Parallel (ms)"
    );
    println!("-----------------------------------------------------");

    for (name, astar_time, euclid_time, dijkstra_time, parallel_time) in &results {
        println!(
            "{:<24} | {:<12.2} | {:<12.2} | {:<12.2} | {:<12.2}",
            name,
            astar_time.as_secs_f64() * 1000.0,
            euclid_time.as_secs_f64() * 1000.0,
            dijkstra_time.as_secs_f64() * 1000.0,
            parallel_time.as_secs_f64() * 1000.0
        );
    }
}
