use curve_rs::api::{ColorPalette, PlotEngine, PlotStyle, PlotterConfig};
use curve_rs::core::{CanvasSize, NearestPointBehavior, Viewport};
use curve_rs::interaction::ZoomBehavior;
use curve_rs::render::{Color, NullRenderer};

#[test]
fn config_json_round_trip() {
    let config = PlotterConfig::new(CanvasSize::new(1280, 720))
        .with_viewport(Viewport::new(-2.0, 2.0, -1.0, 1.0).expect("viewport"))
        .with_sample_density(4)
        .with_zoom_behavior(ZoomBehavior {
            factor: 1.25,
            ..ZoomBehavior::default()
        })
        .with_auto_render(false);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PlotterConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_take_defaults() {
    let parsed = PlotterConfig::from_json_str(r#"{ "canvas": { "width": 800, "height": 600 } }"#)
        .expect("parse");
    assert_eq!(parsed, PlotterConfig::new(CanvasSize::new(800, 600)));
    assert_eq!(parsed.sample_density, 10);
    assert!(parsed.auto_render);
}

#[test]
fn malformed_json_is_invalid_data() {
    assert!(PlotterConfig::from_json_str("{ not json").is_err());
}

#[test]
fn engine_rejects_invalid_configuration() {
    let invalid = [
        PlotterConfig::new(CanvasSize::new(0, 600)),
        PlotterConfig::new(CanvasSize::new(800, 600)).with_sample_density(0),
        PlotterConfig::new(CanvasSize::new(800, 600)).with_nearest_point_behavior(
            NearestPointBehavior {
                threshold_px: -1.0,
                ..NearestPointBehavior::default()
            },
        ),
        PlotterConfig::new(CanvasSize::new(800, 600)).with_style(PlotStyle {
            curve_line_width: 0.0,
            ..PlotStyle::default()
        }),
        PlotterConfig::new(CanvasSize::new(800, 600)).with_viewport(Viewport {
            x_min: 1.0,
            x_max: -1.0,
            y_min: -1.0,
            y_max: 1.0,
        }),
    ];

    for config in invalid {
        assert!(PlotEngine::new(NullRenderer::default(), config).is_err());
    }
}

#[test]
fn custom_palette_drives_equation_colors() {
    let palette = ColorPalette::new(vec![Color::rgb8(10, 20, 30)]).expect("palette");
    let config = PlotterConfig::new(CanvasSize::new(800, 600)).with_palette(palette);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine");
    engine
        .set_equations(&[
            curve_rs::api::EquationInput::visible("x"),
            curve_rs::api::EquationInput::visible("2*x"),
        ])
        .expect("set equations");

    assert!(
        engine
            .equations()
            .iter()
            .all(|equation| equation.color() == Color::rgb8(10, 20, 30))
    );
}
