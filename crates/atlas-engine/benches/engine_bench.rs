use criterion::{black_box, criterion_group, criterion_main, Criterion};

use atlas_core::habit::organs;
use atlas_core::{HabitSelection, Level};
use atlas_engine::HealthEngine;

fn full_selection(engine: &HealthEngine) -> HabitSelection {
    engine
        .reference()
        .habits
        .iter()
        .enumerate()
        .map(|(i, h)| (h.id.clone(), Level::ALL[i % 4]))
        .collect()
}

fn bench_compute_health(c: &mut Criterion) {
    let engine = HealthEngine::builtin();
    let selection = full_selection(&engine);

    c.bench_function("compute_health_full_catalogue", |b| {
        b.iter(|| engine.compute_health(black_box(&selection)))
    });
    c.bench_function("compute_health_empty", |b| {
        b.iter(|| engine.compute_health(black_box(&HabitSelection::new())))
    });
}

fn bench_assess_organ(c: &mut Criterion) {
    let engine = HealthEngine::builtin();
    let selection = full_selection(&engine);

    c.bench_function("assess_organ_brain", |b| {
        b.iter(|| engine.assess_organ(black_box(organs::BRAIN), black_box(&selection)))
    });
}

criterion_group!(benches, bench_compute_health, bench_assess_organ);
criterion_main!(benches);
