use criterion::{Criterion, criterion_group, criterion_main};
use graph_rs::core::{
    AnalysisBehavior, SamplerBehavior, ScreenSize, WorldViewport, find_roots, sample_curve,
};
use graph_rs::eval::Expression;
use std::hint::black_box;

fn bench_expression_eval(c: &mut Criterion) {
    let expression =
        Expression::parse("sin(x) + x^2 / (x + 20)").expect("valid expression");

    c.bench_function("expression_eval", |b| {
        b.iter(|| {
            let _ = expression.eval(black_box(3.21));
        })
    });
}

fn bench_curve_sample_400(c: &mut Criterion) {
    let expression = Expression::parse("sin(x) * x").expect("valid expression");
    let viewport = WorldViewport::default();
    let screen = ScreenSize::new(500, 400);
    let behavior = SamplerBehavior::default();

    c.bench_function("curve_sample_400", |b| {
        b.iter(|| {
            let samples = sample_curve(
                black_box(&expression),
                black_box(viewport),
                black_box(screen),
                black_box(behavior),
            )
            .expect("sampler setup");
            let _ = samples.count();
        })
    });
}

fn bench_root_scan_1000(c: &mut Criterion) {
    let expression = Expression::parse("sin(x)").expect("valid expression");
    let behavior = AnalysisBehavior::default();

    c.bench_function("root_scan_1000", |b| {
        b.iter(|| {
            let _ = find_roots(
                black_box(&expression),
                black_box(-10.0),
                black_box(10.0),
                black_box(behavior),
            )
            .expect("scan should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_expression_eval,
    bench_curve_sample_400,
    bench_root_scan_1000
);
criterion_main!(benches);
