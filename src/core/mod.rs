pub mod grid;
pub mod nearest;
pub mod sampler;
pub mod transform;
pub mod types;

pub use grid::{grid_lines, grid_spacing};
pub use nearest::{ClosestPointResult, NearestPointBehavior, find_nearest_point};
pub use sampler::{DEFAULT_SAMPLE_DENSITY, Polyline, SamplePoint, sample_curve};
pub use transform::CoordinateTransform;
pub use types::{CanvasSize, Viewport};
