use serde::{Deserialize, Serialize};

use crate::core::Palette;
use crate::error::{BoardError, BoardResult};
use crate::render::RenderOptions;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load dashboard setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBoardConfig {
    #[serde(default)]
    pub palette: Palette,
    /// Keeps the historical bar-pass behavior of rotating the shared color
    /// cursor once per bar point without reading it. Disabling it leaves the
    /// cursor untouched by bar passes; doughnut charts rendered afterwards
    /// then start from an earlier palette position.
    #[serde(default = "default_legacy_bar_cursor_advance")]
    pub legacy_bar_cursor_advance: bool,
    #[serde(default = "default_doughnut_options")]
    pub doughnut_options: RenderOptions,
    #[serde(default = "default_series_options")]
    pub series_options: RenderOptions,
}

impl ChartBoardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            legacy_bar_cursor_advance: default_legacy_bar_cursor_advance(),
            doughnut_options: default_doughnut_options(),
            series_options: default_series_options(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_legacy_bar_cursor_advance(mut self, enabled: bool) -> Self {
        self.legacy_bar_cursor_advance = enabled;
        self
    }

    #[must_use]
    pub fn with_doughnut_options(mut self, options: RenderOptions) -> Self {
        self.doughnut_options = options;
        self
    }

    #[must_use]
    pub fn with_series_options(mut self, options: RenderOptions) -> Self {
        self.series_options = options;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> BoardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BoardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BoardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BoardError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for ChartBoardConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_legacy_bar_cursor_advance() -> bool {
    true
}

fn default_doughnut_options() -> RenderOptions {
    RenderOptions::new().with_animation(false)
}

fn default_series_options() -> RenderOptions {
    RenderOptions::new()
        .with_animation(false)
        .with_scale_show_grid_lines(false)
}
