use tracing::trace;

use crate::core::{ClosestPointResult, find_nearest_point};
use crate::error::PlotResult;
use crate::expr::ExpressionCompiler;
use crate::interaction::{InteractionMode, WheelEvent};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer, C: ExpressionCompiler> PlotEngine<R, C> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Currently highlighted curve point, if any.
    #[must_use]
    pub fn hover(&self) -> Option<ClosestPointResult> {
        self.interaction.hover()
    }

    /// Closest visible curve point to a pixel position, within the
    /// configured threshold.
    #[must_use]
    pub fn nearest_point(&self, cursor_x: f64, cursor_y: f64) -> Option<ClosestPointResult> {
        if !cursor_x.is_finite() || !cursor_y.is_finite() {
            return None;
        }
        find_nearest_point(
            self.equations
                .visible()
                .map(|(index, equation)| (index, equation.evaluator())),
            self.transform(),
            cursor_x,
            cursor_y,
            self.nearest_point,
        )
    }

    /// Zooms around the wheel cursor and redraws. Returns `false` when the
    /// step is rejected by the zoom span limits.
    pub fn wheel(&mut self, event: WheelEvent) -> PlotResult<bool> {
        let zoomed = self.viewport.zoom_at(event, self.canvas);
        trace!(
            cursor_x = event.cursor_x,
            cursor_y = event.cursor_y,
            direction = ?event.direction,
            zoomed,
            "wheel"
        );
        if zoomed {
            let hover = self.nearest_point(event.cursor_x, event.cursor_y);
            self.interaction.set_hover(hover);
        }
        self.render_if_auto()?;
        Ok(zoomed)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        trace!(x, y, "pointer down");
        self.interaction.on_pointer_down(x, y);
    }

    /// Pans while a drag is in progress, otherwise refreshes the hover
    /// highlight.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<()> {
        match self.interaction.on_pointer_move(x, y) {
            Some(delta) => {
                trace!(dx = delta.dx, dy = delta.dy, "pan");
                self.viewport.pan_by(delta, self.canvas);
                self.interaction.set_hover(None);
            }
            None => {
                let hover = self.nearest_point(x, y);
                self.interaction.set_hover(hover);
            }
        }
        self.render_if_auto()
    }

    pub fn pointer_up(&mut self) {
        trace!("pointer up");
        self.interaction.on_pointer_up();
    }

    /// Ends any pan and clears the highlight.
    pub fn pointer_leave(&mut self) -> PlotResult<()> {
        trace!("pointer leave");
        self.interaction.on_pointer_leave();
        self.render_if_auto()
    }
}
