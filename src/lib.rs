//! curve-rs: interactive function plotter core.
//!
//! Compiles `y = f(x)` expressions, samples them across a pannable and
//! zoomable viewport, and emits backend-agnostic draw frames with a grid,
//! labeled axes, colored curves and a nearest-point readout.

pub mod api;
pub mod core;
pub mod error;
pub mod expr;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotEngine, PlotterConfig};
pub use error::{PlotError, PlotResult};
