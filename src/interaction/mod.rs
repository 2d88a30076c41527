mod viewport_controller;

pub use viewport_controller::{ViewportController, ZoomBehavior};

use serde::{Deserialize, Serialize};

use crate::core::ClosestPointResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel `delta_y` to a zoom direction: scrolling up (negative)
    /// zooms in, scrolling down zooms out. Zero and non-finite deltas map to
    /// no zoom.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }
}

/// Wheel gesture at a cursor position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub direction: ZoomDirection,
}

impl WheelEvent {
    #[must_use]
    pub const fn new(cursor_x: f64, cursor_y: f64, direction: ZoomDirection) -> Self {
        Self {
            cursor_x,
            cursor_y,
            direction,
        }
    }
}

/// Pixel movement since the previous pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PointerDelta {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Pointer bookkeeping between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    last_pointer: Option<(f64, f64)>,
    hover: Option<ClosestPointResult>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            last_pointer: None,
            hover: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn hover(self) -> Option<ClosestPointResult> {
        self.hover
    }

    pub fn set_hover(&mut self, hover: Option<ClosestPointResult>) {
        self.hover = hover;
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.mode = InteractionMode::Panning;
        self.last_pointer = Some((x, y));
    }

    /// Records the pointer position and returns the delta to pan by when a
    /// pan is in progress.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<PointerDelta> {
        let previous = self.last_pointer.replace((x, y));
        match (self.mode, previous) {
            (InteractionMode::Panning, Some((last_x, last_y))) => {
                Some(PointerDelta::new(x - last_x, y - last_y))
            }
            _ => None,
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    pub fn on_pointer_leave(&mut self) {
        self.mode = InteractionMode::Idle;
        self.last_pointer = None;
        self.hover = None;
    }
}
