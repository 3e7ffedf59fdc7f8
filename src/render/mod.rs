mod recording;

pub use recording::{DrawCall, RecordingRenderer};

use serde::{Deserialize, Serialize};

use crate::core::{SegmentDataset, SeriesData};
use crate::error::BoardResult;
use crate::markup::Surface;

/// Options recognized by every chart mode.
///
/// Field names serialize in the backend's camelCase vocabulary so option
/// payloads can be handed to a renderer verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default = "default_flag")]
    pub animation: bool,
    #[serde(default = "default_flag")]
    pub scale_show_grid_lines: bool,
}

impl RenderOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            animation: true,
            scale_show_grid_lines: true,
        }
    }

    #[must_use]
    pub const fn with_animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub const fn with_scale_show_grid_lines(mut self, show: bool) -> Self {
        self.scale_show_grid_lines = show;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn default_flag() -> bool {
    true
}

/// Contract implemented by any charting backend.
///
/// Backends receive fully materialized datasets, so drawing code stays
/// isolated from markup scanning and color assignment. An empty dataset must
/// render as an empty chart, not fail.
pub trait ChartRenderer {
    fn draw_doughnut(
        &mut self,
        surface: &Surface,
        dataset: &SegmentDataset,
        options: RenderOptions,
    ) -> BoardResult<()>;

    fn draw_line(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()>;

    fn draw_radar(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()>;

    fn draw_bar(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()>;
}
