use crate::core::types::{CanvasSize, Viewport};

/// Bidirectional mapping between math space and pixel space for one
/// viewport snapshot.
///
/// Pixel origin is the top-left corner, so the y axis is inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    viewport: Viewport,
    canvas: CanvasSize,
}

impl CoordinateTransform {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: CanvasSize) -> Self {
        Self { viewport, canvas }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas(self) -> CanvasSize {
        self.canvas
    }

    /// Pixels per math unit along x.
    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.canvas.width_px() / self.viewport.x_span()
    }

    /// Pixels per math unit along y.
    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.canvas.height_px() / self.viewport.y_span()
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        (x - self.viewport.x_min) * self.scale_x()
    }

    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> f64 {
        self.canvas.height_px() - (y - self.viewport.y_min) * self.scale_y()
    }

    #[must_use]
    pub fn to_pixel(self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_pixel(x), self.y_to_pixel(y))
    }

    #[must_use]
    pub fn pixel_to_x(self, px: f64) -> f64 {
        self.viewport.x_min + (px / self.canvas.width_px()) * self.viewport.x_span()
    }

    #[must_use]
    pub fn pixel_to_y(self, py: f64) -> f64 {
        self.viewport.y_max - (py / self.canvas.height_px()) * self.viewport.y_span()
    }

    #[must_use]
    pub fn to_math(self, px: f64, py: f64) -> (f64, f64) {
        (self.pixel_to_x(px), self.pixel_to_y(py))
    }

    /// Returns `true` when `py` lies within `[0, height]`.
    #[must_use]
    pub fn contains_pixel_y(self, py: f64) -> bool {
        (0.0..=self.canvas.height_px()).contains(&py)
    }
}

#[cfg(test)]
mod tests {
    use super::CoordinateTransform;
    use crate::core::{CanvasSize, Viewport};

    #[test]
    fn corners_map_to_canvas_corners() {
        let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(800, 600));
        assert_eq!(transform.to_pixel(-10.0, 10.0), (0.0, 0.0));
        assert_eq!(transform.to_pixel(10.0, -10.0), (800.0, 600.0));
        assert_eq!(transform.to_pixel(0.0, 0.0), (400.0, 300.0));
    }
}
