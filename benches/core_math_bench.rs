use criterion::{Criterion, criterion_group, criterion_main};
use curve_rs::api::{EquationInput, PlotEngine, PlotterConfig};
use curve_rs::core::{CanvasSize, CoordinateTransform, Viewport, sample_curve};
use curve_rs::expr::{BuiltinCompiler, Evaluable, ExpressionCompiler};
use curve_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_transform_round_trip(c: &mut Criterion) {
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(1920, 1080));

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let (px, py) = transform.to_pixel(black_box(4.321), black_box(-1.234));
            let _ = transform.to_math(px, py);
        })
    });
}

fn bench_expression_evaluate(c: &mut Criterion) {
    let program = BuiltinCompiler
        .compile_program("sin(x) * exp(-x^2 / 10) + sqrt(abs(x))")
        .expect("valid expression");

    c.bench_function("expression_evaluate", |b| {
        b.iter(|| {
            let _ = program.evaluate(black_box(1.5));
        })
    });
}

fn bench_sample_curve_1920(c: &mut Criterion) {
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(1920, 1080));
    let tangent = BuiltinCompiler
        .compile("tan(x)")
        .expect("valid expression");

    c.bench_function("sample_curve_tan_1920", |b| {
        b.iter(|| {
            let _ = sample_curve(black_box(tangent.as_ref()), black_box(transform), 10);
        })
    });
}

fn bench_build_frame_three_equations(c: &mut Criterion) {
    let config = PlotterConfig::new(CanvasSize::new(1600, 900)).with_auto_render(false);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_equations(&[
            EquationInput::visible("x^2"),
            EquationInput::visible("sin(x)"),
            EquationInput::visible("1/x"),
        ])
        .expect("set equations");

    c.bench_function("build_frame_three_equations", |b| {
        b.iter(|| {
            let _ = black_box(engine.build_frame());
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_expression_evaluate,
    bench_sample_curve_1920,
    bench_build_frame_three_equations
);
criterion_main!(benches);
