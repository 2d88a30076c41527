use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, ClosestPointResult, Viewport};
use crate::interaction::InteractionMode;
use crate::render::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationSnapshot {
    pub input_index: usize,
    pub expression: String,
    pub color: Color,
    pub visible: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub canvas: CanvasSize,
    pub viewport: Viewport,
    pub interaction_mode: InteractionMode,
    pub equations: Vec<EquationSnapshot>,
    /// Compile error messages keyed by input row.
    pub compile_failures: IndexMap<usize, String>,
    pub hover: Option<ClosestPointResult>,
}
