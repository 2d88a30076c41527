use crate::core::{ClosestPointResult, CoordinateTransform, Polyline, grid_lines, sample_curve};
use crate::render::{
    CirclePrimitive, Color, DrawCommand, LinePrimitive, PolylinePrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::label_format::{format_point, format_value};
use super::{EquationRegistry, PlotStyle};

/// Everything one draw pass reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrameInput<'a> {
    pub transform: CoordinateTransform,
    pub equations: &'a EquationRegistry,
    pub style: &'a PlotStyle,
    pub sample_density: u32,
    pub highlight: Option<ClosestPointResult>,
}

/// Builds a complete frame: clear, grid, axes with labels, visible curves in
/// input order, then the optional highlighted point.
#[must_use]
pub fn build_render_frame(input: RenderFrameInput<'_>) -> RenderFrame {
    let RenderFrameInput {
        transform,
        equations,
        style,
        sample_density,
        highlight,
    } = input;

    let mut frame = RenderFrame::new(transform.canvas());
    frame.push(DrawCommand::Clear(style.background_color));
    append_grid(&mut frame, transform, style);
    append_axes(&mut frame, transform, style);

    for (_, equation) in equations.visible() {
        let polylines = sample_curve(equation.evaluator(), transform, sample_density);
        append_curve(&mut frame, &polylines, equation.color(), style);
    }

    if let Some(highlight) = highlight {
        append_highlight(&mut frame, highlight, style);
    }
    frame
}

fn append_grid(frame: &mut RenderFrame, transform: CoordinateTransform, style: &PlotStyle) {
    let viewport = transform.viewport();
    let width = transform.canvas().width_px();
    let height = transform.canvas().height_px();

    for x in grid_lines(viewport.x_min, viewport.x_max) {
        let px = transform.x_to_pixel(x);
        frame.push(DrawCommand::Line(LinePrimitive::new(
            px,
            0.0,
            px,
            height,
            style.grid_line_width,
            style.grid_line_color,
        )));
    }
    for y in grid_lines(viewport.y_min, viewport.y_max) {
        let py = transform.y_to_pixel(y);
        frame.push(DrawCommand::Line(LinePrimitive::new(
            0.0,
            py,
            width,
            py,
            style.grid_line_width,
            style.grid_line_color,
        )));
    }
}

fn append_axes(frame: &mut RenderFrame, transform: CoordinateTransform, style: &PlotStyle) {
    let viewport = transform.viewport();
    let width = transform.canvas().width_px();
    let height = transform.canvas().height_px();
    let zero_px_y = transform.y_to_pixel(0.0);
    let zero_px_x = transform.x_to_pixel(0.0);

    if (viewport.y_min..=viewport.y_max).contains(&0.0) {
        frame.push(DrawCommand::Line(LinePrimitive::new(
            0.0,
            zero_px_y,
            width,
            zero_px_y,
            style.axis_line_width,
            style.axis_line_color,
        )));
    }
    if (viewport.x_min..=viewport.x_max).contains(&0.0) {
        frame.push(DrawCommand::Line(LinePrimitive::new(
            zero_px_x,
            0.0,
            zero_px_x,
            height,
            style.axis_line_width,
            style.axis_line_color,
        )));
    }

    // Labels follow the axes but stay on canvas when the origin is off-screen.
    let label_y = zero_px_y.clamp(0.0, height);
    let label_x = zero_px_x.clamp(0.0, width);
    let offset = style.axis_label_offset_px;

    for x in grid_lines(viewport.x_min, viewport.x_max) {
        frame.push(DrawCommand::Text(TextPrimitive::new(
            format_value(x),
            transform.x_to_pixel(x) + offset,
            label_y - offset,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        )));
    }
    for y in grid_lines(viewport.y_min, viewport.y_max) {
        frame.push(DrawCommand::Text(TextPrimitive::new(
            format_value(y),
            label_x + offset,
            transform.y_to_pixel(y) - offset,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Left,
        )));
    }
}

fn append_curve(
    frame: &mut RenderFrame,
    polylines: &[Polyline],
    color: Color,
    style: &PlotStyle,
) {
    // A single isolated sample has no extent to stroke.
    for polyline in polylines.iter().filter(|polyline| polyline.len() >= 2) {
        let points = polyline
            .points
            .iter()
            .map(|point| (point.pixel_x, point.pixel_y))
            .collect();
        frame.push(DrawCommand::Polyline(PolylinePrimitive::new(
            points,
            style.curve_line_width,
            color,
        )));
    }
}

fn append_highlight(frame: &mut RenderFrame, highlight: ClosestPointResult, style: &PlotStyle) {
    let point = highlight.point;
    frame.push(DrawCommand::Circle(CirclePrimitive::new(
        point.pixel_x,
        point.pixel_y,
        style.marker_radius_px,
        style.marker_color,
    )));
    frame.push(DrawCommand::Text(TextPrimitive::new(
        format_point(point.x, point.y),
        point.pixel_x + style.marker_label_offset_px,
        point.pixel_y - style.marker_label_offset_px,
        style.marker_label_font_size_px,
        style.marker_label_color,
        TextHAlign::Left,
    )));
}

#[cfg(test)]
mod tests {
    use super::{RenderFrameInput, build_render_frame};
    use crate::api::{EquationRegistry, PlotStyle};
    use crate::core::{CanvasSize, CoordinateTransform, Viewport};
    use crate::render::DrawCommand;

    #[test]
    fn empty_registry_still_draws_background_grid_and_axes() {
        let registry = EquationRegistry::default();
        let style = PlotStyle::default();
        let frame = build_render_frame(RenderFrameInput {
            transform: CoordinateTransform::new(Viewport::default(), CanvasSize::new(800, 600)),
            equations: &registry,
            style: &style,
            sample_density: 10,
            highlight: None,
        });

        assert!(matches!(frame.commands.first(), Some(DrawCommand::Clear(_))));
        // 11 vertical + 11 horizontal grid lines at spacing 2, plus both axes.
        assert_eq!(frame.lines().count(), 24);
        assert_eq!(frame.polylines().count(), 0);
        assert_eq!(frame.texts().count(), 22);
    }

    #[test]
    fn axis_labels_stay_on_canvas_when_origin_is_off_screen() {
        let registry = EquationRegistry::default();
        let style = PlotStyle::default();
        let viewport = Viewport::new(5.0, 15.0, 5.0, 15.0).expect("viewport");
        let frame = build_render_frame(RenderFrameInput {
            transform: CoordinateTransform::new(viewport, CanvasSize::new(400, 400)),
            equations: &registry,
            style: &style,
            sample_density: 10,
            highlight: None,
        });

        // No axis lines: only grid lines use the grid width.
        assert!(
            frame
                .lines()
                .all(|line| line.stroke_width == style.grid_line_width)
        );
        assert!(
            frame
                .texts()
                .all(|text| (-10.0..=410.0).contains(&text.x) && (-10.0..=410.0).contains(&text.y))
        );
    }
}
