//! Benchmarks comparing the attractor engines
//!
//! Run with: cargo bench --bench solver_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gamegraph_attractor::{
    BspFrontierSolver, FrontierConfig, GameGraph, NaiveFixpointSolver, NodeId,
    WorklistFixpointSolver,
};

/// Layered DAG of `depth` layers with `width` nodes each; every node
/// links to the entire next layer, owners alternate per layer. The
/// attractor of the last layer absorbs one layer per round, so depth
/// controls the round count and width the per-round work.
fn generate_layered_graph(width: usize, depth: usize) -> GameGraph {
    let n = width * depth;
    let mut owners = Vec::with_capacity(n);
    let mut edges: Vec<Vec<NodeId>> = Vec::with_capacity(n);
    for layer in 0..depth {
        let next: Vec<NodeId> = if layer + 1 < depth {
            let lo = ((layer + 1) * width) as NodeId;
            (lo..lo + width as NodeId).collect()
        } else {
            Vec::new()
        };
        for _ in 0..width {
            owners.push((layer % 2) as u8);
            edges.push(next.clone());
        }
    }
    GameGraph::build(n, &owners, &edges).expect("layered graph must build")
}

fn last_layer(width: usize, depth: usize) -> Vec<NodeId> {
    let lo = ((depth - 1) * width) as NodeId;
    (lo..lo + width as NodeId).collect()
}

/// Long alternating chain, the worst case for the full-scan engine.
fn generate_chain(n: usize) -> GameGraph {
    let owners: Vec<u8> = (0..n).map(|i| (i % 2) as u8).collect();
    let edges: Vec<Vec<NodeId>> = (0..n)
        .map(|i| if i + 1 < n { vec![(i + 1) as NodeId] } else { vec![] })
        .collect();
    GameGraph::build(n, &owners, &edges).expect("chain must build")
}

/// Compare the three engines on wide, shallow layered games.
fn bench_engines_on_layered_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("attractor_layered");

    for (width, depth) in [(64, 16), (256, 16), (512, 32)].iter() {
        let graph = generate_layered_graph(*width, *depth);
        let target = last_layer(*width, *depth);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        let parameter = format!("{width}x{depth}");
        group.bench_with_input(
            BenchmarkId::new("naive", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| NaiveFixpointSolver::new().solve(black_box(graph), black_box(&target)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("worklist", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| WorklistFixpointSolver::new().solve(black_box(graph), black_box(&target)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("frontier", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| BspFrontierSolver::new().solve(black_box(graph), black_box(&target)))
            },
        );
    }

    group.finish();
}

/// Deep chains maximize round counts and punish full rescans.
fn bench_engines_on_deep_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("attractor_deep_chain");

    for n in [100usize, 1_000, 5_000].iter() {
        let graph = generate_chain(*n);
        let target = vec![(*n - 1) as NodeId];
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        let parameter = format!("{n}_nodes");
        group.bench_with_input(
            BenchmarkId::new("naive", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| NaiveFixpointSolver::new().solve(black_box(graph), black_box(&target)))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("worklist", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| WorklistFixpointSolver::new().solve(black_box(graph), black_box(&target)))
            },
        );
    }

    group.finish();
}

/// Partition-count sweep for the frontier engine on one large graph.
fn bench_frontier_partition_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_partitions");

    let graph = generate_layered_graph(512, 16);
    let target = last_layer(512, 16);
    group.throughput(Throughput::Elements(graph.edge_count() as u64));

    for partitions in [1usize, 2, 4, 8].iter() {
        let solver = BspFrontierSolver::with_config(FrontierConfig {
            partitions: Some(*partitions),
        });
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{partitions}_partitions")),
            &graph,
            |b, graph| b.iter(|| solver.solve(black_box(graph), black_box(&target))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_engines_on_layered_graphs,
    bench_engines_on_deep_chains,
    bench_frontier_partition_counts,
);

criterion_main!(benches);
