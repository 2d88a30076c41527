use crate::error::PlotResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_polyline_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.last_line_count = 0;
        self.last_polyline_count = 0;
        self.last_circle_count = 0;
        self.last_text_count = 0;
        for command in &frame.commands {
            match command {
                DrawCommand::Clear(_) => {}
                DrawCommand::Line(_) => self.last_line_count += 1,
                DrawCommand::Polyline(_) => self.last_polyline_count += 1,
                DrawCommand::Circle(_) => self.last_circle_count += 1,
                DrawCommand::Text(_) => self.last_text_count += 1,
            }
        }
        self.frames_rendered += 1;
        Ok(())
    }
}
