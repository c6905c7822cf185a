#[macro_use]
extern crate criterion;
extern crate mandelbrot;
extern crate num;

use criterion::{black_box, Criterion};
use mandelbrot::{escape_time, RenderConfig, Renderer};
use num::Complex;

fn escape_points(c: &mut Criterion) {
    c.bench_function("escape near the boundary", |b| {
        let point = Complex {
            re: -0.7463,
            im: 0.1102,
        };
        b.iter(|| escape_time(black_box(point), black_box(500)))
    });
    c.bench_function("escape from a member", |b| {
        let point = Complex { re: -0.5, im: 0.0 };
        b.iter(|| escape_time(black_box(point), black_box(500)))
    });
}

fn whole_frames(c: &mut Criterion) {
    c.bench_function("64x64 classic frame", |b| {
        let config = RenderConfig {
            width: 64,
            height: 64,
            max_iterations: 100,
            ..RenderConfig::classic()
        };
        let renderer = Renderer::new(&config).unwrap();
        b.iter(|| renderer.render())
    });
}

criterion_group!(benches, escape_points, whole_frames);
criterion_main!(benches);
