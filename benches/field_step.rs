//! Benchmarks for seeding and stepping the ring field on the CPU.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ringfield::prelude::*;

fn seeded_field() -> ParticleField<ColorLerp> {
    let a = PixelBuffer::radial_gradient(256, Palette::Grayscale);
    let b = PixelBuffer::radial_gradient(256, Palette::Viridis);
    let mut ctx = SeedContext::from_seed(7);
    ParticleField::seed(
        &LayoutConfig::default(),
        Vec2::splat(CANVAS_SIZE),
        &a,
        &b,
        &mut ctx,
        ColorLerp::new,
    )
}

fn bench_layout(c: &mut Criterion) {
    let layout = LayoutConfig::default();

    c.bench_function("layout_positions", |b| {
        b.iter(|| black_box(layout.positions(Vec2::splat(1020.0)).count()))
    });

    c.bench_function("seed_field", |b| b.iter(|| black_box(seeded_field().len())));
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let cursors = [
        ("inactive", Cursor::INACTIVE.position()),
        ("center", Vec2::new(1020.0, 1020.0)),
        ("edge", Vec2::new(1800.0, 1020.0)),
    ];

    for (name, cursor) in cursors {
        group.bench_with_input(BenchmarkId::new("sorted", name), &cursor, |b, &cursor| {
            let mut field = seeded_field();
            b.iter(|| black_box(field.frame(cursor).len()))
        });

        group.bench_with_input(BenchmarkId::new("step_only", name), &cursor, |b, &cursor| {
            let mut field = seeded_field();
            b.iter(|| field.step(black_box(cursor)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_frame);
criterion_main!(benches);
