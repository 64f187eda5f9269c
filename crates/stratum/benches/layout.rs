use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use stratum::{Edge, LayoutOptions, Node, layout};

#[derive(Debug, Clone)]
struct DagShape {
    nodes: Vec<Node<usize>>,
    edges: Vec<Edge<usize>>,
}

fn build_dag(node_count: usize, fanout: usize) -> DagShape {
    let nodes: Vec<Node<usize>> = (0..node_count).map(Node::new).collect();
    let mut edges: Vec<Edge<usize>> = Vec::new();

    // A spine to guarantee connectivity.
    for i in 0..node_count.saturating_sub(1) {
        edges.push(Edge::new(i, i + 1));
    }

    // Extra forward edges to create crossing pressure.
    for i in 0..node_count {
        for k in 2..=(fanout + 1) {
            let to = i.saturating_add(k);
            if to >= node_count {
                break;
            }
            edges.push(Edge::new(i, to));
        }

        // Long edges produce virtual chains.
        let to = i.saturating_add(10);
        if to < node_count {
            edges.push(Edge::new(i, to));
        }
    }

    DagShape { nodes, edges }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let options = LayoutOptions::default();
    let cases = [
        ("dag_50_f3", 50usize, 3usize),
        ("dag_200_f4", 200usize, 4usize),
        // Above the default node threshold: transpose is skipped.
        ("dag_800_f2", 800usize, 2usize),
    ];

    for (name, nodes, fanout) in cases {
        let shape = build_dag(nodes, fanout);
        group.bench_with_input(BenchmarkId::new("layout", name), &shape, |b, shape| {
            b.iter(|| {
                let result = layout(black_box(&shape.nodes), black_box(&shape.edges), &options);
                black_box(result.map(|r| r.nodes.len()).unwrap_or(0));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
