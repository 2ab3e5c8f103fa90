use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use workout_ledger::models::{Coords, Workout};
use workout_ledger::services::Ledger;

const WORKOUT_COUNT: i64 = 1000;

/// A ledger of alternating runs and rides with scattered distances.
fn build_ledger() -> Ledger {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    let workouts = (0..WORKOUT_COUNT)
        .map(|i| {
            let created = start + Duration::minutes(i * 37);
            let id = format!("{:010}", 1_000_000 + i);
            let coords = Coords::new(37.0 + i as f64 * 1e-4, -122.0);
            let distance = ((i * 7919) % 500) as f64 / 10.0 + 1.0;
            if i % 2 == 0 {
                Workout::running(id, created, coords, distance, distance * 5.5, 172.0)
            } else {
                Workout::cycling(id, created, coords, distance, distance * 2.5, 120.0)
            }
        })
        .collect();
    Ledger::from_workouts(workouts).expect("ids are unique")
}

fn benchmark_ledger(c: &mut Criterion) {
    let ledger = build_ledger();
    let json = ledger.to_json().expect("Failed to serialize ledger");

    let mut group = c.benchmark_group("ledger");

    group.bench_function("sort_by_distance", |b| {
        b.iter(|| {
            let mut l = ledger.clone();
            l.sort_by_distance_ascending();
            black_box(l)
        })
    });

    group.bench_function("serialize", |b| b.iter(|| black_box(&ledger).to_json()));

    group.bench_function("deserialize", |b| {
        b.iter(|| Ledger::from_json(black_box(&json)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_ledger);
criterion_main!(benches);
