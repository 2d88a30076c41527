use approx::assert_abs_diff_eq;
use curve_rs::core::{
    CanvasSize, CoordinateTransform, NearestPointBehavior, Viewport, find_nearest_point,
};
use curve_rs::expr::Evaluable;

fn default_transform() -> CoordinateTransform {
    CoordinateTransform::new(Viewport::default(), CanvasSize::new(800, 600))
}

#[test]
fn cursor_on_curve_matches_with_near_zero_distance() {
    let transform = default_transform();
    let identity = |x: f64| x;
    let (cx, cy) = transform.to_pixel(1.0, 1.0);

    let result = find_nearest_point(
        [(0, &identity as &dyn Evaluable)],
        transform,
        cx,
        cy,
        NearestPointBehavior::default(),
    )
    .expect("cursor sits on the curve");

    assert_eq!(result.equation_index, 0);
    assert!(result.distance_px < 1e-6);
    assert_abs_diff_eq!(result.point.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.point.y, 1.0, epsilon = 1e-9);
}

#[test]
fn far_cursor_has_no_match() {
    let transform = default_transform();
    let identity = |x: f64| x;
    let (cx, cy) = transform.to_pixel(1.0, 1.0);

    let result = find_nearest_point(
        [(0, &identity as &dyn Evaluable)],
        transform,
        cx,
        cy + 1_000.0,
        NearestPointBehavior::default(),
    );
    assert!(result.is_none());
}

#[test]
fn closest_equation_wins() {
    let transform = default_transform();
    let low = |_: f64| 0.0;
    let high = |_: f64| 0.1;
    let (cx, cy) = transform.to_pixel(2.0, 0.09);

    let result = find_nearest_point(
        [
            (0, &low as &dyn Evaluable),
            (1, &high as &dyn Evaluable),
        ],
        transform,
        cx,
        cy,
        NearestPointBehavior::default(),
    )
    .expect("match");
    assert_eq!(result.equation_index, 1);
}

#[test]
fn undefined_samples_are_skipped() {
    let transform = default_transform();
    let reciprocal = |x: f64| 1.0 / x;
    let (cx, cy) = transform.to_pixel(0.0, 0.0);

    // Every finite sample near the pole is far off-screen.
    let result = find_nearest_point(
        [(0, &reciprocal as &dyn Evaluable)],
        transform,
        cx,
        cy,
        NearestPointBehavior::default(),
    );
    assert!(result.is_none());
}

#[test]
fn threshold_is_exclusive() {
    let transform = default_transform();
    let flat = |_: f64| 0.0;
    let (cx, cy) = transform.to_pixel(0.0, 0.0);
    let behavior = NearestPointBehavior {
        threshold_px: 10.0,
        ..NearestPointBehavior::default()
    };

    let at_threshold = find_nearest_point(
        [(0, &flat as &dyn Evaluable)],
        transform,
        cx,
        cy - 10.0,
        behavior,
    );
    let inside = find_nearest_point(
        [(0, &flat as &dyn Evaluable)],
        transform,
        cx,
        cy - 9.5,
        behavior,
    );
    assert!(at_threshold.is_none());
    assert!(inside.is_some());
}
