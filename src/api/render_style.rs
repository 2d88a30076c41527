use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Style contract for every render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub background_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Offset of axis labels from their grid line / axis intersection.
    pub axis_label_offset_px: f64,
    pub curve_line_width: f64,
    pub marker_color: Color,
    pub marker_radius_px: f64,
    pub marker_label_color: Color,
    pub marker_label_font_size_px: f64,
    /// Offset of the `(x, y)` readout from the highlighted point.
    pub marker_label_offset_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            grid_line_color: Color::LIGHT_GRAY,
            grid_line_width: 1.0,
            axis_line_color: Color::BLACK,
            axis_line_width: 2.0,
            axis_label_color: Color::BLACK,
            axis_label_font_size_px: 10.0,
            axis_label_offset_px: 2.0,
            curve_line_width: 2.0,
            marker_color: Color::RED,
            marker_radius_px: 5.0,
            marker_label_color: Color::BLACK,
            marker_label_font_size_px: 12.0,
            marker_label_offset_px: 10.0,
        }
    }
}

impl PlotStyle {
    pub fn validate(self) -> PlotResult<()> {
        for color in [
            self.background_color,
            self.grid_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.marker_color,
            self.marker_label_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("curve_line_width", self.curve_line_width),
            ("marker_radius_px", self.marker_radius_px),
            ("marker_label_font_size_px", self.marker_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("axis_label_offset_px", self.axis_label_offset_px),
            ("marker_label_offset_px", self.marker_label_offset_px),
        ] {
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "style `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }
}
