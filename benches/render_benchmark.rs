#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for graph rendering and encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_display::dataset::Dataset;
use graph_display::output::{PngEncoder, RasterSurface, SvgSurface};
use graph_display::plot::FunctionPlot;

fn sine_dataset(n: usize) -> Dataset {
    let pairs: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = i as f64 / 10.0;
            (x, x.sin() * 5.0)
        })
        .collect();
    Dataset::from_pairs(&pairs).expect("finite sample data")
}

fn raster_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_render");
    let plot = FunctionPlot::new();

    for n in [10, 100, 1000] {
        let dataset = sine_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dataset, |b, data| {
            b.iter(|| {
                let mut surface = RasterSurface::new(800, 600).expect("surface creation");
                plot.render(black_box(data), &mut surface).expect("render should succeed")
            });
        });
    }

    group.finish();
}

fn svg_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg_render");
    let plot = FunctionPlot::new();

    for n in [10, 100, 1000] {
        let dataset = sine_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &dataset, |b, data| {
            b.iter(|| {
                let mut surface = SvgSurface::new(800, 600);
                plot.render(black_box(data), &mut surface).expect("render should succeed");
                surface.render()
            });
        });
    }

    group.finish();
}

fn png_encoder_benchmark(c: &mut Criterion) {
    let mut surface = RasterSurface::new(800, 600).expect("surface creation");
    FunctionPlot::new()
        .render(&sine_dataset(100), &mut surface)
        .expect("render should succeed");
    let fb = surface.into_framebuffer();

    c.bench_function("png_encoder/800x600", |b| {
        b.iter(|| PngEncoder::to_bytes(black_box(&fb)).expect("encoding should succeed"));
    });
}

criterion_group!(
    benches,
    raster_render_benchmark,
    svg_render_benchmark,
    png_encoder_benchmark
);
criterion_main!(benches);
