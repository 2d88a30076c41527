use crate::error::PlotResult;
use crate::expr::ExpressionCompiler;
use crate::render::Renderer;

use super::{CompileFailure, Equation, EquationInput, PlotEngine};

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    /// Recompiles the whole equation list and redraws.
    ///
    /// Blank rows are ignored. Rows that fail to compile are returned and
    /// left out of the plot; everything else is drawn.
    pub fn set_equations(&mut self, inputs: &[EquationInput]) -> PlotResult<Vec<CompileFailure>> {
        self.equations.rebuild(inputs, &self.compiler, &self.palette);
        self.interaction.set_hover(None);
        self.render_if_auto()?;
        Ok(self.equations.failures())
    }

    /// Shows or hides one active equation without recompiling it.
    pub fn set_equation_visibility(&mut self, index: usize, visible: bool) -> PlotResult<()> {
        self.equations.set_visibility(index, visible)?;
        self.interaction.set_hover(None);
        self.render_if_auto()
    }

    /// Active equations in input order.
    #[must_use]
    pub fn equations(&self) -> &[Equation] {
        self.equations.equations()
    }

    /// Compile failures from the most recent `set_equations` call.
    #[must_use]
    pub fn compile_failures(&self) -> Vec<CompileFailure> {
        self.equations.failures()
    }
}
