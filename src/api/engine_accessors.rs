use crate::core::{CanvasSize, NearestPointBehavior, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::expr::ExpressionCompiler;
use crate::interaction::ZoomBehavior;
use crate::render::Renderer;

use super::{ColorPalette, PlotEngine, PlotStyle};

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        self.viewport.set_viewport(viewport)?;
        self.interaction.set_hover(None);
        self.render_if_auto()
    }

    /// Restores the viewport from construction time.
    pub fn reset_viewport(&mut self) -> PlotResult<()> {
        self.viewport.reset();
        self.interaction.set_hover(None);
        self.render_if_auto()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Changes the drawing surface size. The math viewport is unchanged, so
    /// the plot stretches to the new aspect ratio.
    pub fn resize(&mut self, canvas: CanvasSize) -> PlotResult<()> {
        canvas.validate()?;
        self.canvas = canvas;
        self.interaction.set_hover(None);
        self.render_if_auto()
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn set_style(&mut self, style: PlotStyle) -> PlotResult<()> {
        style.validate()?;
        self.style = style;
        self.render_if_auto()
    }

    #[must_use]
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Replaces the palette. Colors apply from the next `set_equations`.
    pub fn set_palette(&mut self, palette: ColorPalette) -> PlotResult<()> {
        palette.validate()?;
        self.palette = palette;
        Ok(())
    }

    #[must_use]
    pub fn sample_density(&self) -> u32 {
        self.sample_density
    }

    pub fn set_sample_density(&mut self, density: u32) -> PlotResult<()> {
        if density == 0 {
            return Err(PlotError::InvalidData(
                "sample density must be > 0".to_owned(),
            ));
        }
        self.sample_density = density;
        self.render_if_auto()
    }

    #[must_use]
    pub fn nearest_point_behavior(&self) -> NearestPointBehavior {
        self.nearest_point
    }

    pub fn set_nearest_point_behavior(&mut self, behavior: NearestPointBehavior) -> PlotResult<()> {
        behavior.validate()?;
        self.nearest_point = behavior;
        Ok(())
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.viewport.zoom_behavior()
    }

    pub fn set_zoom_behavior(&mut self, behavior: ZoomBehavior) -> PlotResult<()> {
        self.viewport.set_zoom_behavior(behavior)
    }

    #[must_use]
    pub fn auto_render(&self) -> bool {
        self.auto_render
    }

    pub fn set_auto_render(&mut self, auto_render: bool) {
        self.auto_render = auto_render;
    }
}
