use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use latticestore_core::{Graph, TermKind, WILDCARD};

/// Generate `count` distinct triples: subjects cycle through a small range
/// so that wildcard subject/predicate queries have nontrivial result sets.
fn generate_test_triples(count: u32) -> Vec<(u32, u32, u32)> {
    (0..count).map(|i| (i % 1000, i % 10, i)).collect()
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_insert");

    for size in [100u32, 1_000, 10_000].iter() {
        let triples = generate_test_triples(*size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("insert_{size}_triples")),
            &triples,
            |b, triples| {
                b.iter(|| {
                    let mut graph = Graph::create(triples.len(), true);
                    for &(s, p, o) in triples.iter() {
                        black_box(graph.insert(s, p, o, TermKind::Iri, 0).unwrap());
                    }
                    black_box(&graph);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_contains");

    for size in [100u32, 1_000, 10_000].iter() {
        let triples = generate_test_triples(*size);
        let mut graph = Graph::create(triples.len(), true);
        for &(s, p, o) in triples.iter() {
            graph.insert(s, p, o, TermKind::Iri, 0).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("contains_{size}_triples")),
            &(&graph, &triples),
            |b, (graph, triples)| {
                b.iter(|| {
                    let mut found = 0u32;
                    for &(s, p, o) in triples.iter().take(1000) {
                        if graph.contains(s, p, o) {
                            found += 1;
                        }
                    }
                    black_box(found);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_find_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_find_pattern");

    for size in [1_000u32, 10_000, 100_000].iter() {
        let triples = generate_test_triples(*size);
        let mut graph = Graph::create(triples.len(), true);
        for &(s, p, o) in triples.iter() {
            graph.insert(s, p, o, TermKind::Iri, 0).unwrap();
        }

        let mut buf = vec![0u32; *size as usize];

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("simd_{size}_triples")),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let n = graph.find_pattern(WILDCARD, 3, WILDCARD, &mut buf);
                    black_box(n);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_simd_vs_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("simd_vs_scalar");

    let triples = generate_test_triples(20_000);

    let mut simd_graph = Graph::create(triples.len(), true);
    let mut scalar_graph = Graph::create(triples.len(), false);
    for &(s, p, o) in triples.iter() {
        simd_graph.insert(s, p, o, TermKind::Iri, 0).unwrap();
        scalar_graph.insert(s, p, o, TermKind::Iri, 0).unwrap();
    }

    let mut buf = vec![0u32; triples.len()];

    group.bench_function("simd_enabled", |b| {
        b.iter(|| black_box(simd_graph.find_pattern(WILDCARD, 3, WILDCARD, &mut buf)));
    });

    group.bench_function("scalar_only", |b| {
        b.iter(|| black_box(scalar_graph.find_pattern(WILDCARD, 3, WILDCARD, &mut buf)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_find_pattern,
    benchmark_simd_vs_scalar
);
criterion_main!(benches);
