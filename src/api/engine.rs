use tracing::debug;

use crate::core::{CanvasSize, CoordinateTransform, NearestPointBehavior};
use crate::error::PlotResult;
use crate::expr::{BuiltinCompiler, ExpressionCompiler};
use crate::interaction::{InteractionState, ViewportController};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{RenderFrameInput, build_render_frame};
use super::{ColorPalette, EquationRegistry, PlotStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the viewport, the active equation set and pointer
/// state, and hands a freshly built frame to its renderer on every redraw.
/// The expression language is pluggable through `C`.
pub struct PlotEngine<R: Renderer, C: ExpressionCompiler = BuiltinCompiler> {
    pub(super) renderer: R,
    pub(super) compiler: C,
    pub(super) canvas: CanvasSize,
    pub(super) viewport: ViewportController,
    pub(super) equations: EquationRegistry,
    pub(super) interaction: InteractionState,
    pub(super) style: PlotStyle,
    pub(super) palette: ColorPalette,
    pub(super) sample_density: u32,
    pub(super) nearest_point: NearestPointBehavior,
    pub(super) auto_render: bool,
}

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        CoordinateTransform::new(self.viewport.viewport(), self.canvas)
    }

    /// Materializes the current state into a draw-ready frame.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        build_render_frame(RenderFrameInput {
            transform: self.transform(),
            equations: &self.equations,
            style: &self.style,
            sample_density: self.sample_density,
            highlight: self.interaction.hover(),
        })
    }

    /// Full redraw: clear, grid, axes, every visible curve, highlight.
    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_frame();
        debug!(
            commands = frame.commands.len(),
            curves = frame.polylines().count(),
            highlighted = self.interaction.hover().is_some(),
            "render pass"
        );
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    pub(super) fn render_if_auto(&mut self) -> PlotResult<()> {
        if self.auto_render {
            self.render()
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
