//! Host-facing plotting API.

mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod equation_registry;
mod interaction_controller;
mod label_format;
mod point_query;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;

pub use engine::PlotEngine;
pub use engine_config::PlotterConfig;
pub use engine_snapshot::{EquationSnapshot, PlotSnapshot};
pub use equation_registry::{
    ColorPalette, CompileFailure, Equation, EquationInput, EquationRegistry,
};
pub use label_format::{format_point, format_value};
pub use point_query::{PointQueryResult, PointQueryStatus};
pub use render_frame_builder::{RenderFrameInput, build_render_frame};
pub use render_style::PlotStyle;
