use curve_rs::api::{EquationInput, PlotEngine, PlotSnapshot, PlotterConfig};
use curve_rs::core::{CanvasSize, Viewport};
use curve_rs::interaction::InteractionMode;
use curve_rs::render::NullRenderer;

#[test]
fn snapshot_captures_equations_failures_and_viewport() {
    let mut engine = PlotEngine::new(
        NullRenderer::default(),
        PlotterConfig::new(CanvasSize::new(800, 600)),
    )
    .expect("engine init");
    engine
        .set_equations(&[
            EquationInput::visible("x^2"),
            EquationInput::visible("2 +"),
            EquationInput::new("cos(x)", false),
        ])
        .expect("set equations");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.canvas, CanvasSize::new(800, 600));
    assert_eq!(snapshot.viewport, Viewport::default());
    assert_eq!(snapshot.interaction_mode, InteractionMode::Idle);
    assert_eq!(snapshot.equations.len(), 2);
    assert_eq!(snapshot.equations[0].expression, "x^2");
    assert_eq!(snapshot.equations[1].input_index, 2);
    assert!(!snapshot.equations[1].visible);
    assert_eq!(
        snapshot.compile_failures.keys().copied().collect::<Vec<_>>(),
        vec![1]
    );
    assert!(snapshot.hover.is_none());
}

#[test]
fn snapshot_json_round_trips() {
    let mut engine = PlotEngine::new(
        NullRenderer::default(),
        PlotterConfig::new(CanvasSize::new(400, 400)),
    )
    .expect("engine init");
    engine
        .set_equations(&[EquationInput::visible("x")])
        .expect("set equations");
    let (cx, cy) = engine.transform().to_pixel(1.0, 1.0);
    engine.pointer_move(cx, cy).expect("hover");

    let json = engine.snapshot_json_pretty().expect("serialize");
    let parsed: PlotSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, engine.snapshot());
    assert!(parsed.hover.is_some());
}
