use spatial_astar::graph::sample::sample_graph;
use spatial_astar::{
    AStar, Euclidean, Heuristic, Manhattan, NavGraph, SearchOutcome, StepManhattan, ZeroHeuristic,
};
use std::env;
use std::time::Instant;

/// Command line configuration for a single query
#[derive(Debug, Clone)]
struct QueryConfig {
    from: String,
    to: String,
    /// Repeat the query this many times and report the mean time
    bench_iterations: Option<usize>,
    heuristic: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            from: "A".to_string(),
            to: "E".to_string(),
            bench_iterations: None,
            heuristic: "manhattan".to_string(),
        }
    }
}

impl QueryConfig {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = QueryConfig::default();
        let mut positional = Vec::new();
        let mut iter = args.iter().skip(1);

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--bench" => {
                    let value = iter.next().ok_or("--bench needs an iteration count")?;
                    let count = value
                        .parse()
                        .map_err(|_| format!("invalid iteration count: {}", value))?;
                    config.bench_iterations = Some(count);
                }
                "--heuristic" => {
                    let value = iter.next().ok_or("--heuristic needs a name")?;
                    config.heuristic = value.to_lowercase();
                }
                _ => positional.push(arg.clone()),
            }
        }

        if let Some(from) = positional.first() {
            config.from = from.clone();
        }
        if let Some(to) = positional.get(1) {
            config.to = to.clone();
        }

        Ok(config)
    }
}

fn run<H: Heuristic<f64>>(graph: &NavGraph<f64>, config: &QueryConfig, searcher: AStar<H>) -> Result<(), Box<dyn std::error::Error>> {
    let start = graph
        .node_by_label(&config.from)
        .ok_or_else(|| format!("unknown node: {}", config.from))?;
    let goal = graph
        .node_by_label(&config.to)
        .ok_or_else(|| format!("unknown node: {}", config.to))?;

    println!("Path {} -> {}", config.from, config.to);

    let outcome = match config.bench_iterations {
        Some(iterations) if iterations > 0 => {
            let timer = Instant::now();
            let mut outcome = searcher.find_path(graph, start, goal)?;
            for _ in 1..iterations {
                outcome = searcher.find_path(graph, start, goal)?;
            }
            let elapsed = timer.elapsed();
            println!(
                "  Time: {:.6} ms",
                elapsed.as_secs_f64() * 1000.0 / iterations as f64
            );
            outcome
        }
        _ => searcher.find_path(graph, start, goal)?,
    };

    match outcome {
        SearchOutcome::Found(path) => {
            for (i, node) in path.steps().iter().enumerate() {
                println!("  {}. {}", i + 1, graph.label(*node).unwrap_or("?"));
            }
            println!("  Distance: {}", path.total_cost());
        }
        SearchOutcome::AtGoal => println!("  Already at goal"),
        SearchOutcome::Unreachable => println!("  Failed"),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = QueryConfig::from_args(&args)?;
    let graph = sample_graph()?;

    match config.heuristic.as_str() {
        "manhattan" => run(&graph, &config, AStar::new().with_heuristic(Manhattan)),
        "euclidean" => run(&graph, &config, AStar::new().with_heuristic(Euclidean)),
        "step" => run(&graph, &config, AStar::new().with_heuristic(StepManhattan)),
        "zero" => run(&graph, &config, AStar::new().with_heuristic(ZeroHeuristic)),
        other => Err(format!("unknown heuristic: {} (manhattan, euclidean, step, zero)", other).into()),
    }
}
