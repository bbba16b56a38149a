use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gamegrade_core::model::GameRecord;
use gamegrade_core::recommend::Recommendations;
use gamegrade_core::scoring::Scorer;

fn make_catalog(n: usize) -> Vec<GameRecord> {
    let categories = ["arithmetic", "puzzle", "memory", "logic", "geometry", "advanced", "fractions"];
    (0..n)
        .map(|i| {
            GameRecord::new(
                format!("game-{i}"),
                format!("Math Challenge {i}"),
                categories[i % categories.len()],
                "An interactive puzzle game: solve advanced equation problems, find the pattern",
            )
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let scorer = Scorer::default();

    group.bench_function("single", |b| {
        let record = &make_catalog(1)[0];
        b.iter(|| scorer.analyze(black_box(record)))
    });

    group.bench_function("catalog_100", |b| {
        let catalog = make_catalog(100);
        b.iter(|| scorer.analyze_all(black_box(&catalog)))
    });

    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    let analyses = Scorer::default().analyze_all(&make_catalog(1000));
    c.bench_function("recommendations_1000", |b| {
        b.iter(|| Recommendations::build(black_box(&analyses)))
    });
}

criterion_group!(benches, bench_analyze, bench_recommendations);
criterion_main!(benches);
