use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use latticestore_core::{Graph, TermKind, RDF_TYPE};
use latticestore_shacl::{Constraint, ShapeRegistry, Validator};

/// Builds a graph of `size` instances split evenly across 10 classes, each
/// with a handful of `has_part` properties so MinCount/MaxCount have real
/// work to do.
fn generate_test_graph(size: u32) -> Graph {
    let mut g = Graph::create(size as usize * 4, true);
    for i in 0..size {
        let class = 100 + (i % 10);
        g.insert(i, RDF_TYPE, class, TermKind::Iri, 0).unwrap();
        for part in 0..(i % 3) {
            g.insert(i, 5, 1000 + part, TermKind::Iri, 0).unwrap();
        }
    }
    g
}

fn registry_with_class_and_count_shapes() -> ShapeRegistry {
    let mut r = ShapeRegistry::new();
    for class in 100..110 {
        r.define_shape(class, class);
        r.add_constraint(class, Constraint::Class(class)).unwrap();
        r.add_constraint(class, Constraint::MinCount { property: 5, k: 1 }).unwrap();
        r.add_constraint(class, Constraint::MaxCount { property: 5, k: 2 }).unwrap();
    }
    r
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("shacl_validate");

    for size in [100u32, 1_000, 10_000].iter() {
        let graph = generate_test_graph(*size);
        let registry = registry_with_class_and_count_shapes();
        let validator = Validator::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("validate_{size}_node_graph")),
            &(&graph, &registry, &validator),
            |b, (graph, registry, validator)| {
                b.iter(|| {
                    for node in 0..100u32.min(*size) {
                        black_box(validator.validate(registry, graph, node));
                    }
                });
            },
        );
    }

    group.finish();
}

fn benchmark_single_node_validate(c: &mut Criterion) {
    let graph = generate_test_graph(10_000);
    let registry = registry_with_class_and_count_shapes();
    let validator = Validator::new();

    c.bench_function("shacl_validate_single_node", |b| {
        b.iter(|| black_box(validator.validate(&registry, &graph, black_box(42))));
    });
}

criterion_group!(benches, benchmark_validate, benchmark_single_node_validate);
criterion_main!(benches);
