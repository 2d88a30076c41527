use crate::error::{PlotError, PlotResult};
use crate::expr::ExpressionCompiler;
use crate::render::Renderer;

use super::{EquationSnapshot, PlotEngine, PlotSnapshot};

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            canvas: self.canvas,
            viewport: self.viewport.viewport(),
            interaction_mode: self.interaction.mode(),
            equations: self
                .equations
                .equations()
                .iter()
                .map(|equation| EquationSnapshot {
                    input_index: equation.input_index(),
                    expression: equation.expression().to_owned(),
                    color: equation.color(),
                    visible: equation.is_visible(),
                })
                .collect(),
            compile_failures: self
                .equations
                .failures()
                .into_iter()
                .map(|failure| (failure.input_index, failure.error.to_string()))
                .collect(),
            hover: self.interaction.hover(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
