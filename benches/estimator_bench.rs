use beamstat::api::MemoizedAnalyzer;
use beamstat::config::SeverityThresholds;
use beamstat::estimator::compute_derived;
use beamstat::scores::parse_score_table;
use beamstat::RunCount;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

// 20x20x20 mesh, the size of a typical dose scoring box.
fn mesh_dump() -> String {
    let mut text = String::from("# mesh boxMesh_1\n# iX, iY, iZ, total(value), total(val^2), entry\n");
    for i in 0..20 {
        for j in 0..20 {
            for k in 0..20 {
                let v = (i * 400 + j * 20 + k) as f64 * 0.37 + 1.0;
                text.push_str(&format!("{},{},{},{},{},{}\n", i, j, k, v, v * v * 1.1, 100));
            }
        }
    }
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let text = mesh_dump();
    let table = parse_score_table(&text).unwrap();
    let runs = RunCount::new(100_000).unwrap();

    c.bench_function("parse_score_table_8000", |b| {
        b.iter(|| parse_score_table(black_box(&text)).unwrap())
    });

    c.bench_function("compute_derived_8000", |b| {
        b.iter(|| compute_derived(black_box(&table), runs))
    });

    let mut memo = MemoizedAnalyzer::new();
    let thresholds = SeverityThresholds::default();
    c.bench_function("memoized_analyze_8000", |b| {
        b.iter(|| {
            memo.analyze(black_box("/run/beamOn 100000"), black_box(&text), &thresholds)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
