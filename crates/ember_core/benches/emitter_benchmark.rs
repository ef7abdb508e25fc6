//! # Emitter Performance Benchmark
//!
//! REQUIREMENTS:
//! - 100,000 particles
//! - < 1ms per update
//! - 0 allocations during update
//!
//! Run with: `cargo bench --package ember_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ember_core::{EmitterConfig, EmitterKind, ParticleEmitter, Vec3, FIXED_TICK_SECONDS};

/// Builds an emitter and runs it until the pool is saturated.
fn warmed_emitter(kind: EmitterKind, count: usize) -> ParticleEmitter {
    let mut emitter = ParticleEmitter::with_seed(42);
    emitter
        .configure(EmitterConfig {
            kind,
            max_particles: count,
            particle_lifespan: 2.0,
            particle_lifespan_variance: 0.5,
            speed: 50.0,
            speed_variance: 20.0,
            angle_variance: 180.0,
            gravity: Vec3::new(0.0, -98.0, 0.0),
            radial_acceleration: 10.0,
            tangential_acceleration: 5.0,
            max_radius: 200.0,
            max_radius_variance: 50.0,
            rotate_per_second: 45.0,
            ..Default::default()
        })
        .expect("bench config is valid");
    for _ in 0..120 {
        emitter.update(FIXED_TICK_SECONDS);
    }
    emitter
}

/// Benchmark: Steady-state update (spawn + integrate + compact).
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_update");

    for kind in [EmitterKind::Gravity, EmitterKind::Radial] {
        for count in [10_000, 100_000] {
            let mut emitter = warmed_emitter(kind, count);
            group.bench_with_input(
                BenchmarkId::new(format!("{kind:?}"), count),
                &count,
                |b, _| {
                    b.iter(|| {
                        emitter.update(black_box(FIXED_TICK_SECONDS));
                        emitter.active_count()
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark: Configure (allocation of pool + render buffer).
fn bench_configure(c: &mut Criterion) {
    c.bench_function("configure_100k", |b| {
        b.iter(|| {
            let mut emitter = ParticleEmitter::with_seed(1);
            emitter
                .configure(EmitterConfig {
                    max_particles: black_box(100_000),
                    ..Default::default()
                })
                .expect("bench config is valid");
            emitter.capacity()
        });
    });
}

/// Benchmark: Reading the render buffer as bytes.
fn bench_render_bytes(c: &mut Criterion) {
    let emitter = warmed_emitter(EmitterKind::Gravity, 100_000);
    c.bench_function("render_bytes_100k", |b| {
        b.iter(|| black_box(emitter.render_bytes()).len());
    });
}

criterion_group!(benches, bench_update, bench_configure, bench_render_bytes);
criterion_main!(benches);
