use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, DEFAULT_SAMPLE_DENSITY, NearestPointBehavior, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::interaction::ZoomBehavior;

use super::{ColorPalette, PlotStyle};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    pub canvas: CanvasSize,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_sample_density")]
    pub sample_density: u32,
    #[serde(default)]
    pub nearest_point: NearestPointBehavior,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    #[serde(default)]
    pub style: PlotStyle,
    #[serde(default)]
    pub palette: ColorPalette,
    /// Re-render after every state-changing call.
    #[serde(default = "default_auto_render")]
    pub auto_render: bool,
}

impl PlotterConfig {
    /// Creates a config with the default `[-10, 10] x [-10, 10]` viewport.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            viewport: Viewport::default(),
            sample_density: default_sample_density(),
            nearest_point: NearestPointBehavior::default(),
            zoom: ZoomBehavior::default(),
            style: PlotStyle::default(),
            palette: ColorPalette::default(),
            auto_render: default_auto_render(),
        }
    }

    /// Sets the initial viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets curve samples per horizontal pixel.
    #[must_use]
    pub fn with_sample_density(mut self, density: u32) -> Self {
        self.sample_density = density;
        self
    }

    #[must_use]
    pub fn with_nearest_point_behavior(mut self, behavior: NearestPointBehavior) -> Self {
        self.nearest_point = behavior;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, behavior: ZoomBehavior) -> Self {
        self.zoom = behavior;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Enables or disables rendering after each state change.
    #[must_use]
    pub fn with_auto_render(mut self, auto_render: bool) -> Self {
        self.auto_render = auto_render;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.canvas.validate()?;
        self.viewport.validate()?;
        if self.sample_density == 0 {
            return Err(PlotError::InvalidData(
                "sample density must be > 0".to_owned(),
            ));
        }
        self.nearest_point.validate()?;
        self.zoom.validate()?;
        self.style.validate()?;
        self.palette.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_sample_density() -> u32 {
    DEFAULT_SAMPLE_DENSITY
}

fn default_auto_render() -> bool {
    true
}
