use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use spatial_astar::graph::generators::{generate_3d_grid, generate_obstacle_grid};
use spatial_astar::graph::sample::sample_graph;
use spatial_astar::{AStar, Dijkstra, Euclidean, PathFinder};

fn bench_sample_graph(c: &mut Criterion) {
    let graph = sample_graph().expect("sample graph");
    let a = graph.node_by_label("A").unwrap();
    let e = graph.node_by_label("E").unwrap();
    let astar = AStar::new();

    c.bench_function("sample A->E", |b| {
        b.iter(|| astar.find_path(black_box(&graph), black_box(a), black_box(e)))
    });
}

fn bench_grids(c: &mut Criterion) {
    let grid = generate_3d_grid(16, 16, 16);
    let far_corner = grid.node_count() - 1;

    let mut rng = StdRng::seed_from_u64(7);
    let obstacles = generate_obstacle_grid(120, 120, 0.2, &mut rng);
    let last = obstacles.node_count() - 1;

    let astar = AStar::new();
    let astar_euclidean = AStar::new().with_heuristic(Euclidean);
    let dijkstra = Dijkstra::new();

    let mut group = c.benchmark_group("grid 16^3 corner to corner");
    group.bench_function("A* manhattan", |b| b.iter(|| astar.find_path(&grid, 0, far_corner)));
    group.bench_function("Dijkstra", |b| {
        b.iter(|| PathFinder::find_path(&dijkstra, &grid, 0, far_corner))
    });
    group.finish();

    let mut group = c.benchmark_group("obstacle grid 120x120");
    group.bench_function("A* manhattan", |b| b.iter(|| astar.find_path(&obstacles, 0, last)));
    group.bench_function("A* euclidean", |b| {
        b.iter(|| astar_euclidean.find_path(&obstacles, 0, last))
    });
    group.finish();
}

criterion_group!(benches, bench_sample_graph, bench_grids);
criterion_main!(benches);
