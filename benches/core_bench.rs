use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec2;
use std::hint::black_box;
use surface_viewport::core::auto_fit::FitProbe;
use surface_viewport::core::label::{resolve_anchor, LabelLayout};
use surface_viewport::{BezierPatch, OrbitCamera, Surface};

fn bench_fit_probe(c: &mut Criterion) {
    let mut patch = BezierPatch::with_seed(42);
    patch.init();
    let camera = OrbitCamera::new();

    c.bench_function("auto_fit_probe_measure", |b| {
        b.iter(|| {
            let probe = FitProbe::measure(black_box(&camera), |u, v| patch.patch(u, v));
            black_box(probe.decision(1.0))
        })
    });
}

fn bench_label_anchor(c: &mut Criterion) {
    let layout = LabelLayout {
        viewport: DVec2::new(1280.0, 720.0),
        label_size: DVec2::new(140.0, 56.0),
        margin: 12.0,
    };
    let points: Vec<DVec2> = (0..1024)
        .map(|i| {
            let t = i as f64 / 1024.0;
            DVec2::new((t * 13.0).sin(), (t * 7.0).cos())
        })
        .collect();

    c.bench_function("label_resolve_anchor_batch", |b| {
        b.iter(|| {
            let mut sum = DVec2::ZERO;
            for point in &points {
                sum += resolve_anchor(black_box(*point), &layout);
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_fit_probe, bench_label_anchor);
criterion_main!(benches);
