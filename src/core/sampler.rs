use serde::{Deserialize, Serialize};

use crate::core::transform::CoordinateTransform;
use crate::expr::{Evaluable, evaluate_finite};

/// Samples per horizontal pixel used for curve rendering.
pub const DEFAULT_SAMPLE_DENSITY: u32 = 10;

/// One evaluated point in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

/// Contiguous run of samples with no discontinuity between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<SamplePoint>,
}

impl Polyline {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Math-space `x` extent covered by this run.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.x, last.x))
    }
}

/// Walks `evaluable` across the visible x-range and returns the renderable
/// runs.
///
/// The pen lifts whenever evaluation fails, the value is not finite, or the
/// pixel-y leaves `[0, height]`; the next valid sample starts a new run.
/// Output depends only on the inputs.
#[must_use]
pub fn sample_curve(
    evaluable: &dyn Evaluable,
    transform: CoordinateTransform,
    density: u32,
) -> Vec<Polyline> {
    let viewport = transform.viewport();
    let steps = u64::from(transform.canvas().width) * u64::from(density.max(1));
    let step = viewport.x_span() / steps as f64;

    let mut polylines = Vec::new();
    let mut current = Polyline::default();

    for index in 0..=steps {
        let x = viewport.x_min + index as f64 * step;
        let sample = evaluate_finite(evaluable, x).ok().and_then(|y| {
            let (pixel_x, pixel_y) = transform.to_pixel(x, y);
            transform.contains_pixel_y(pixel_y).then_some(SamplePoint {
                x,
                y,
                pixel_x,
                pixel_y,
            })
        });

        match sample {
            Some(point) => current.points.push(point),
            None if !current.is_empty() => polylines.push(std::mem::take(&mut current)),
            None => {}
        }
    }

    if !current.is_empty() {
        polylines.push(current);
    }
    polylines
}

#[cfg(test)]
mod tests {
    use super::sample_curve;
    use crate::core::{CanvasSize, CoordinateTransform, Viewport};

    #[test]
    fn continuous_curve_inside_view_is_one_run() {
        let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(100, 100));
        let line = |x: f64| x / 2.0;
        let polylines = sample_curve(&line, transform, 10);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].len(), 1001);
    }

    #[test]
    fn curve_outside_view_produces_nothing() {
        let transform = CoordinateTransform::new(Viewport::default(), CanvasSize::new(100, 100));
        let far = |_: f64| 1_000.0;
        assert!(sample_curve(&far, transform, 10).is_empty());
    }
}
