#[macro_use]
extern crate criterion;
extern crate fractal_viewer;

use criterion::Criterion;
use fractal_viewer::{FractalConfig, Renderer, Viewport};

fn renderer(workers: usize) -> Renderer {
    let config = FractalConfig::new("mandelbrot", 1280, 720, workers, 1000).unwrap();
    Renderer::new(config).unwrap()
}

fn render_60_workers(c: &mut Criterion) {
    let r = renderer(60);
    c.bench_function("render 60 workers", move |b| {
        b.iter(|| r.render(&Viewport::default()))
    });
}

fn render_120_workers(c: &mut Criterion) {
    let r = renderer(120);
    c.bench_function("render 120 workers", move |b| {
        b.iter(|| r.render(&Viewport::default()))
    });
}

fn render_240_workers(c: &mut Criterion) {
    let r = renderer(240);
    c.bench_function("render 240 workers", move |b| {
        b.iter(|| r.render(&Viewport::default()))
    });
}

fn render_zoomed(c: &mut Criterion) {
    let r = renderer(60);
    let v = Viewport::new(0.0, 0.0, 1.1f64.powi(10)).unwrap();
    c.bench_function("render zoomed 1.1^10", move |b| b.iter(|| r.render(&v)));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = render_60_workers, render_120_workers, render_240_workers, render_zoomed
}
criterion_main!(benches);
