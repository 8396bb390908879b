//! Benchmarks for tatter cloth simulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tatter::*;

fn bench_cloth_frames(c: &mut Criterion) {
    c.bench_function("cloth_40x40_60_frames", |b| {
        b.iter(|| {
            let mut scene: Scene<f32> =
                Scene::new(SceneConfig::new(), Bounds::from_size(1280.0, 720.0)).unwrap();
            for _ in 0..60 {
                scene.frame(1000.0 / 60.0, &mut NoOpStepObserver);
            }
            scene.cloth().positions()
        });
    });
}

fn bench_tear_query(c: &mut Criterion) {
    let bounds = Bounds::from_size(1280.0f32, 720.0);
    let cloth = MeshBuilder::for_scene(&SceneConfig::new(), &bounds).build().unwrap();
    let point = bounds.center();
    c.bench_function("nearest_constraint_40x40", |b| {
        b.iter(|| cloth.nearest_constraint(black_box(point), black_box(40.0)));
    });
}

criterion_group!(benches, bench_cloth_frames, bench_tear_query);
criterion_main!(benches);
