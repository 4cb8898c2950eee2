use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

use waymark_lib::{demo_graph, find_path, AStarEngine, Graph, NullObserver};

static GRAPH: Lazy<Graph> = Lazy::new(|| demo_graph(17).expect("demo graph builds"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("astar_a_to_n", |b| {
        b.iter(|| {
            let route = find_path(graph, "A", "N").expect("route exists");
            black_box(route.cost)
        });
    });

    c.bench_function("astar_engine_a_to_o", |b| {
        b.iter(|| {
            let mut engine = AStarEngine::new();
            let outcome = engine
                .search(graph, "A", "O", &mut NullObserver)
                .expect("valid endpoints");
            black_box(outcome)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
