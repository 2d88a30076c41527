use crate::error::PlotResult;
use crate::expr::{BuiltinCompiler, ExpressionCompiler};
use crate::interaction::{InteractionState, ViewportController};
use crate::render::Renderer;

use super::{EquationRegistry, PlotEngine, PlotterConfig};

impl<R: Renderer> PlotEngine<R> {
    /// Creates an engine using the built-in expression language.
    pub fn new(renderer: R, config: PlotterConfig) -> PlotResult<Self> {
        Self::with_compiler(renderer, BuiltinCompiler, config)
    }
}

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    /// Creates an engine with a host-provided expression compiler.
    ///
    /// The engine starts with no equations and does not render until the
    /// first state change or an explicit [`PlotEngine::render`].
    pub fn with_compiler(renderer: R, compiler: C, config: PlotterConfig) -> PlotResult<Self> {
        config.validate()?;
        let viewport = ViewportController::new(config.viewport, config.zoom)?;

        Ok(Self {
            renderer,
            compiler,
            canvas: config.canvas,
            viewport,
            equations: EquationRegistry::default(),
            interaction: InteractionState::default(),
            style: config.style,
            palette: config.palette,
            sample_density: config.sample_density,
            nearest_point: config.nearest_point,
            auto_render: config.auto_render,
        })
    }
}
