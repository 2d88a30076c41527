use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, CoordinateTransform, Viewport};
use crate::error::{PlotError, PlotResult};

use super::{PointerDelta, WheelEvent, ZoomDirection};

/// Tuning for wheel zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Multiplicative span change per wheel notch.
    pub factor: f64,
    /// Zoom-in steps that would shrink either span below this are rejected.
    pub min_span: f64,
    /// Zoom-out steps that would grow either span above this are rejected.
    pub max_span: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            factor: 1.1,
            min_span: 1e-9,
            max_span: 1e12,
        }
    }
}

impl ZoomBehavior {
    pub fn validate(self) -> PlotResult<()> {
        if !self.factor.is_finite() || self.factor <= 1.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 1".to_owned(),
            ));
        }
        if !self.min_span.is_finite() || self.min_span <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_span.is_finite() || self.max_span <= self.min_span {
            return Err(PlotError::InvalidData(
                "zoom max span must be finite and > min span".to_owned(),
            ));
        }
        Ok(())
    }

    fn allows(self, viewport: Viewport) -> bool {
        let spans = [viewport.x_span(), viewport.y_span()];
        spans
            .iter()
            .all(|span| span.is_finite() && *span >= self.min_span && *span <= self.max_span)
    }
}

/// Single owner of the visible math rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportController {
    viewport: Viewport,
    initial: Viewport,
    zoom: ZoomBehavior,
}

impl ViewportController {
    pub fn new(viewport: Viewport, zoom: ZoomBehavior) -> PlotResult<Self> {
        viewport.validate()?;
        zoom.validate()?;
        Ok(Self {
            viewport,
            initial: viewport,
            zoom,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom
    }

    pub fn set_zoom_behavior(&mut self, zoom: ZoomBehavior) -> PlotResult<()> {
        zoom.validate()?;
        self.zoom = zoom;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    /// Restores the viewport the controller was created with.
    pub fn reset(&mut self) {
        self.viewport = self.initial;
    }

    /// Scales all bounds toward (zoom in) or away from (zoom out) the math
    /// point under the cursor, which stays pixel-stationary.
    ///
    /// Returns `false` and leaves the viewport untouched when the result
    /// would violate the configured span limits.
    pub fn zoom_at(&mut self, event: WheelEvent, canvas: CanvasSize) -> bool {
        let transform = CoordinateTransform::new(self.viewport, canvas);
        let (mouse_x, mouse_y) = transform.to_math(event.cursor_x, event.cursor_y);
        if !mouse_x.is_finite() || !mouse_y.is_finite() {
            return false;
        }

        let factor = self.zoom.factor;
        let rescale = |bound: f64, anchor: f64| match event.direction {
            ZoomDirection::In => anchor + (bound - anchor) / factor,
            ZoomDirection::Out => anchor + (bound - anchor) * factor,
        };
        let next = Viewport {
            x_min: rescale(self.viewport.x_min, mouse_x),
            x_max: rescale(self.viewport.x_max, mouse_x),
            y_min: rescale(self.viewport.y_min, mouse_y),
            y_max: rescale(self.viewport.y_max, mouse_y),
        };

        if next.validate().is_err() || !self.zoom.allows(next) {
            return false;
        }
        self.viewport = next;
        true
    }

    /// Shifts the viewport so content follows a pointer drag of
    /// `(dx, dy)` pixels. Spans are preserved.
    pub fn pan_by(&mut self, delta: PointerDelta, canvas: CanvasSize) -> bool {
        if !delta.dx.is_finite() || !delta.dy.is_finite() || !canvas.is_valid() {
            return false;
        }
        let shift_x = delta.dx * (self.viewport.x_span() / canvas.width_px());
        let shift_y = delta.dy * (self.viewport.y_span() / canvas.height_px());
        let next = Viewport {
            x_min: self.viewport.x_min - shift_x,
            x_max: self.viewport.x_max - shift_x,
            y_min: self.viewport.y_min + shift_y,
            y_max: self.viewport.y_max + shift_y,
        };
        if next.validate().is_err() {
            return false;
        }
        self.viewport = next;
        true
    }

    /// Centers the viewport on `(x, y)` keeping both spans.
    pub fn center_on(&mut self, x: f64, y: f64) -> PlotResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlotError::InvalidData(
                "center point must be finite".to_owned(),
            ));
        }
        let half_x = self.viewport.x_span() / 2.0;
        let half_y = self.viewport.y_span() / 2.0;
        self.set_viewport(Viewport {
            x_min: x - half_x,
            x_max: x + half_x,
            y_min: y - half_y,
            y_max: y + half_y,
        })
    }
}
