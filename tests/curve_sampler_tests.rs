use curve_rs::core::{CanvasSize, CoordinateTransform, Viewport, sample_curve};
use curve_rs::expr::{BuiltinCompiler, ExpressionCompiler};

#[test]
fn reciprocal_splits_at_the_pole() {
    let viewport = Viewport::new(-1.0, 1.0, -10.0, 10.0).expect("viewport");
    let transform = CoordinateTransform::new(viewport, CanvasSize::new(200, 200));
    let reciprocal = BuiltinCompiler.compile("1/x").expect("compiles");

    let polylines = sample_curve(reciprocal.as_ref(), transform, 10);

    assert!(polylines.len() >= 2);
    for polyline in &polylines {
        let (start, end) = polyline.x_extent().expect("non-empty run");
        assert!(
            (start < 0.0 && end < 0.0) || (start > 0.0 && end > 0.0),
            "run [{start}, {end}] spans the pole"
        );
    }
}

#[test]
fn square_root_never_samples_negative_x() {
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(800, 600));
    let sqrt = BuiltinCompiler.compile("sqrt(x)").expect("compiles");

    let polylines = sample_curve(sqrt.as_ref(), transform, 10);

    assert_eq!(polylines.len(), 1);
    assert!(
        polylines
            .iter()
            .flat_map(|polyline| &polyline.points)
            .all(|point| point.x >= 0.0)
    );
}

#[test]
fn nan_from_closure_lifts_the_pen_like_a_domain_error() {
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(400, 300));
    let sqrt = |x: f64| x.sqrt();
    let polylines = sample_curve(&sqrt, transform, 4);
    assert!(
        polylines
            .iter()
            .flat_map(|polyline| &polyline.points)
            .all(|point| point.x >= 0.0)
    );
}

#[test]
fn samples_leaving_the_canvas_vertically_end_the_run() {
    // x^2 leaves [-10, 10] for |x| > sqrt(10).
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(800, 600));
    let square = BuiltinCompiler.compile("x^2").expect("compiles");

    let polylines = sample_curve(square.as_ref(), transform, 10);

    assert_eq!(polylines.len(), 1);
    let (start, end) = polylines[0].x_extent().expect("non-empty run");
    assert!(start >= -10f64.sqrt() && end <= 10f64.sqrt());
    assert!(
        polylines[0]
            .points
            .iter()
            .all(|point| (0.0..=600.0).contains(&point.pixel_y))
    );
}

#[test]
fn sampling_is_deterministic() {
    let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(320, 240));
    let wave = BuiltinCompiler.compile("tan(x)").expect("compiles");
    let first = sample_curve(wave.as_ref(), transform, 10);
    let second = sample_curve(wave.as_ref(), transform, 10);
    assert_eq!(first, second);
}
