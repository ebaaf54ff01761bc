//! Record Performance Benchmarks
//!
//! Measures the cost of validated record construction and of the
//! JSON-LD serialization round trip across input sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use strenda_biocat::SchemaRegistry;

/// Create test data for benchmarking
fn create_component_data(id: usize) -> Value {
    json!({
        "name": format!("component-{}", id),
        "smiles": "O=Cc1ccccc1",
        "persistent_identifier_PID": format!("CHEBI:{}", 17000 + id),
        "concentration": id as f64 * 0.5,
        "concentration_unit": "mM",
        "supplier": "Merck",
        "purity": 99.0,
        "formulation": "liquid",
        "solubility_limit": 60.0,
        "solubility_limit_unit": "mM"
    })
}

fn bench_record_construction(c: &mut Criterion) {
    let registry = SchemaRegistry::new().unwrap();
    let mut group = c.benchmark_group("record_construction");

    for size in [1usize, 10, 100].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    let record = registry
                        .instantiate("components.Components", create_component_data(i))
                        .unwrap();
                    black_box(record);
                }
            });
        });
    }
    group.finish();
}

fn bench_registry_creation(c: &mut Criterion) {
    c.bench_function("registry_creation", |b| {
        b.iter(|| black_box(SchemaRegistry::new().unwrap()));
    });
}

fn bench_serialization_round_trip(c: &mut Criterion) {
    let registry = SchemaRegistry::new().unwrap();
    let record = registry
        .instantiate("components.Components", create_component_data(1))
        .unwrap();

    c.bench_function("serialization_round_trip", |b| {
        b.iter(|| {
            let document = record.to_json();
            let rebuilt = registry
                .record_from_json("components.Components", black_box(document))
                .unwrap();
            black_box(rebuilt);
        });
    });
}

criterion_group!(
    benches,
    bench_record_construction,
    bench_registry_creation,
    bench_serialization_round_trip
);
criterion_main!(benches);
