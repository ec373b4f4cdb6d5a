//! Criterion benchmarks for similarity ranking.
//!
//! Measures the time to score and rank catalogs of 100, 1 000 and 10 000
//! cities so regressions in the per-city distance show up early.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package citymatch-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use citymatch_core::{
    CategorySet, Catalog, City, Dimension, Level, Rating, RecommendRequest, Recommender,
    UserPreferences,
};
use citymatch_scorer::SimilarityEngine;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic catalog generation.
const BENCHMARK_SEED: u64 = 42;

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[usize] = &[100, 1_000, 10_000];

const LEVELS: [Level; 3] = [Level::Low, Level::Medium, Level::High];

fn level(rng: &mut ChaCha8Rng) -> Level {
    LEVELS
        .get(rng.gen_range(0..LEVELS.len()))
        .copied()
        .unwrap_or(Level::Low)
}

fn codes(rng: &mut ChaCha8Rng, dimension: Dimension) -> CategorySet {
    let max = dimension.max_code();
    let picked: Vec<i64> = (1..=i64::from(max)).filter(|_| rng.gen_bool(0.5)).collect();
    CategorySet::from_codes(picked, max).unwrap_or_default()
}

/// Generate `count` cities with uniformly random attributes.
fn generate_catalog(count: usize, seed: u64) -> Option<Catalog> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cities = (0..count)
        .map(|idx| City {
            name: format!("City {idx}"),
            climate: level(&mut rng),
            population: level(&mut rng),
            city_rhythm: level(&mut rng),
            weather_stability: level(&mut rng),
            infrastructure: level(&mut rng),
            greenery: level(&mut rng),
            safety: Rating::clamped(rng.gen_range(1..=10)),
            cultural_activities: Rating::clamped(rng.gen_range(1..=10)),
            work_mode: codes(&mut rng, Dimension::WorkMode),
            lifestyle: codes(&mut rng, Dimension::Lifestyle),
            preferred_objects: codes(&mut rng, Dimension::PreferredObjects),
            green_preference: codes(&mut rng, Dimension::GreenPreference),
        })
        .collect();
    Catalog::new(cities).ok()
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let engine = SimilarityEngine::with_defaults();
    let request = RecommendRequest::new(UserPreferences::default());

    for &size in CATALOG_SIZES {
        let Some(catalog) = generate_catalog(size, BENCHMARK_SEED) else {
            continue;
        };
        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| engine.recommend(catalog, &request));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
