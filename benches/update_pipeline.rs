//! Update pipeline benchmarks.
//!
//! These benchmarks verify that a full recompute (widths, clones,
//! coordinates, visibility) stays cheap enough to run on every resize
//! tick, even for strips far larger than any realistic carousel.
//!
//! Run with: cargo bench --bench update_pipeline

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use whirl::config::{Options, Settings};
use whirl::core::{Carousel, Part};
use whirl::model::Item;

fn strip(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("item {i}"), 80.0 + (i % 4) as f64 * 20.0).expect("valid width"))
        .collect()
}

fn build(count: usize, looping: bool) -> Carousel {
    let settings = Settings {
        looping,
        items: 4,
        margin: 10.0,
        ..Settings::default()
    };
    let options = Options {
        base: settings,
        responsive: Default::default(),
    };
    Carousel::new(options, strip(count), 1200.0)
}

fn bench_full_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_recompute");
    for count in [10usize, 100, 1000] {
        let mut carousel = build(count, false);
        carousel.take_events();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                carousel.invalidate(Part::Width);
                carousel.update();
                carousel.take_events();
                black_box(carousel.stage_width());
            });
        });
    }
    group.finish();
}

fn bench_loop_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_recompute");
    for count in [10usize, 100, 1000] {
        let mut carousel = build(count, true);
        carousel.take_events();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                // items invalidation forces clone regeneration too
                carousel.invalidate(Part::Items);
                carousel.update();
                carousel.take_events();
                black_box(carousel.clone_count());
            });
        });
    }
    group.finish();
}

fn bench_position_only(c: &mut Criterion) {
    let mut carousel = build(1000, false);
    carousel.take_events();
    c.bench_function("position_only_update", |b| {
        let mut target = 0isize;
        b.iter(|| {
            target = (target + 7) % 900;
            carousel.to(black_box(target), Some(0));
            carousel.take_events();
        });
    });
}

criterion_group!(
    benches,
    bench_full_recompute,
    bench_loop_recompute,
    bench_position_only
);
criterion_main!(benches);
