use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> PlotResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(PlotError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Visible mathematical rectangle `[x_min, x_max] x [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotResult<Self> {
        let viewport = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(self) -> PlotResult<()> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(PlotError::InvalidViewport(
                "viewport bounds must be finite".to_owned(),
            ));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(PlotError::InvalidViewport(format!(
                "viewport requires x_min < x_max and y_min < y_max, got [{}, {}] x [{}, {}]",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn x_span(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_span(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            self.x_min + self.x_span() / 2.0,
            self.y_min + self.y_span() / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasSize, Viewport};

    #[test]
    fn viewport_rejects_inverted_and_non_finite_bounds() {
        assert!(Viewport::new(1.0, -1.0, 0.0, 1.0).is_err());
        assert!(Viewport::new(0.0, 1.0, 2.0, 2.0).is_err());
        assert!(Viewport::new(f64::NEG_INFINITY, 1.0, 0.0, 1.0).is_err());
        assert!(Viewport::new(-1.0, 1.0, -2.0, 2.0).is_ok());
    }

    #[test]
    fn zero_sized_canvas_is_invalid() {
        assert!(CanvasSize::new(0, 600).validate().is_err());
        assert!(CanvasSize::new(800, 600).validate().is_ok());
    }
}
