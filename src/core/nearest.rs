use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::sampler::SamplePoint;
use crate::core::transform::CoordinateTransform;
use crate::error::{PlotError, PlotResult};
use crate::expr::{Evaluable, evaluate_finite};

/// Tuning for the cursor readout search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestPointBehavior {
    /// Search window width as a fraction of the visible x-span.
    pub window_ratio: f64,
    /// Number of intervals in the search window; `samples + 1` points are
    /// evaluated per equation.
    pub samples: u32,
    /// Matches at or beyond this pixel distance are discarded.
    pub threshold_px: f64,
}

impl Default for NearestPointBehavior {
    fn default() -> Self {
        Self {
            window_ratio: 0.005,
            samples: 100,
            threshold_px: 10.0,
        }
    }
}

impl NearestPointBehavior {
    pub fn validate(self) -> PlotResult<()> {
        if !self.window_ratio.is_finite() || self.window_ratio <= 0.0 {
            return Err(PlotError::InvalidData(
                "nearest-point window ratio must be finite and > 0".to_owned(),
            ));
        }
        if self.samples == 0 {
            return Err(PlotError::InvalidData(
                "nearest-point samples must be > 0".to_owned(),
            ));
        }
        if !self.threshold_px.is_finite() || self.threshold_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "nearest-point threshold must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Closest rendered point to the cursor and the equation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestPointResult {
    pub point: SamplePoint,
    pub equation_index: usize,
    pub distance_px: f64,
}

/// Brute-force local search for the curve sample nearest to the cursor.
///
/// Each `(equation_index, evaluable)` pair is sampled in a narrow window
/// centered on the cursor's math-space x. On equal distances the first
/// candidate wins: lower position in `equations`, then lower x.
pub fn find_nearest_point<'a, I>(
    equations: I,
    transform: CoordinateTransform,
    cursor_x: f64,
    cursor_y: f64,
    behavior: NearestPointBehavior,
) -> Option<ClosestPointResult>
where
    I: IntoIterator<Item = (usize, &'a dyn Evaluable)>,
{
    let x_mouse = transform.pixel_to_x(cursor_x);
    let x_range = transform.viewport().x_span() * behavior.window_ratio;
    let window_start = x_mouse - x_range / 2.0;
    let samples = f64::from(behavior.samples.max(1));

    let mut best: Option<(OrderedFloat<f64>, ClosestPointResult)> = None;
    for (equation_index, evaluable) in equations {
        for step in 0..=behavior.samples {
            let x = window_start + (f64::from(step) / samples) * x_range;
            let Ok(y) = evaluate_finite(evaluable, x) else {
                continue;
            };
            let (pixel_x, pixel_y) = transform.to_pixel(x, y);
            let distance = OrderedFloat((pixel_x - cursor_x).hypot(pixel_y - cursor_y));
            match best {
                Some((current, _)) if current <= distance => {}
                _ => {
                    best = Some((
                        distance,
                        ClosestPointResult {
                            point: SamplePoint {
                                x,
                                y,
                                pixel_x,
                                pixel_y,
                            },
                            equation_index,
                            distance_px: distance.into_inner(),
                        },
                    ));
                }
            }
        }
    }

    best.filter(|(distance, _)| distance.into_inner() < behavior.threshold_px)
        .map(|(_, result)| result)
}
