//! Grouping pass benchmarks using Criterion.rs.

use carpool_core::model::split_by_role;
use carpool_core::synthetic::{generate_dataset, GeneratorParams};
use carpool_core::{FirstFitMatcher, GeoPoint, MatchConfig, RiderAssignment};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_form_groups(c: &mut Criterion) {
    let scenarios = vec![
        ("small", 50, 200),
        ("medium", 200, 1000),
        ("large", 500, 3000),
    ];

    let mut group = c.benchmark_group("form_groups");
    for (name, num_drivers, num_riders) in scenarios {
        let params = GeneratorParams::default()
            .with_counts(num_drivers, num_riders)
            .with_seed(42);
        let (drivers, riders) = split_by_role(generate_dataset(&params));

        for assignment in [RiderAssignment::Shared, RiderAssignment::Exclusive] {
            let matcher = FirstFitMatcher::new(MatchConfig::default().with_rider_assignment(assignment));
            group.bench_with_input(
                BenchmarkId::new(format!("{assignment:?}"), name),
                &(drivers.as_slice(), riders.as_slice()),
                |b, &(drivers, riders)| {
                    b.iter(|| black_box(matcher.form_groups(drivers, riders)));
                },
            );
        }
    }
    group.finish();
}

fn bench_geodesic_distance(c: &mut Criterion) {
    let a = GeoPoint::new(52.52, 13.405);
    let b = GeoPoint::new(52.40, 13.05);
    c.bench_function("geodesic_distance_km", |bench| {
        bench.iter(|| black_box(black_box(a).distance_km(&black_box(b))));
    });
}

criterion_group!(benches, bench_form_groups, bench_geodesic_distance);
criterion_main!(benches);
