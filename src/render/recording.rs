use indexmap::IndexMap;

use crate::core::{SegmentDataset, SeriesData};
use crate::error::BoardResult;
use crate::markup::Surface;
use crate::render::{ChartRenderer, RenderOptions};

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Doughnut {
        dataset: SegmentDataset,
        options: RenderOptions,
    },
    Line {
        data: SeriesData,
        options: RenderOptions,
    },
    Radar {
        data: SeriesData,
        options: RenderOptions,
    },
    Bar {
        data: SeriesData,
        options: RenderOptions,
    },
}

/// Backend for tests and headless usage.
///
/// Validates every dataset and records draw calls per surface in encounter
/// order, so callers can assert on the exact renderer input.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: IndexMap<String, Vec<DrawCall>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls recorded against one surface, in order.
    #[must_use]
    pub fn calls_for(&self, surface_id: &str) -> &[DrawCall] {
        self.calls.get(surface_id).map_or(&[], Vec::as_slice)
    }

    /// Surface ids in first-draw order.
    #[must_use]
    pub fn surface_ids(&self) -> Vec<&str> {
        self.calls.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.values().map(Vec::len).sum()
    }

    fn record(&mut self, surface: &Surface, call: DrawCall) {
        self.calls.entry(surface.id.clone()).or_default().push(call);
    }
}

impl ChartRenderer for RecordingRenderer {
    fn draw_doughnut(
        &mut self,
        surface: &Surface,
        dataset: &SegmentDataset,
        options: RenderOptions,
    ) -> BoardResult<()> {
        dataset.validate()?;
        self.record(
            surface,
            DrawCall::Doughnut {
                dataset: dataset.clone(),
                options,
            },
        );
        Ok(())
    }

    fn draw_line(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()> {
        data.validate()?;
        self.record(
            surface,
            DrawCall::Line {
                data: data.clone(),
                options,
            },
        );
        Ok(())
    }

    fn draw_radar(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()> {
        data.validate()?;
        self.record(
            surface,
            DrawCall::Radar {
                data: data.clone(),
                options,
            },
        );
        Ok(())
    }

    fn draw_bar(
        &mut self,
        surface: &Surface,
        data: &SeriesData,
        options: RenderOptions,
    ) -> BoardResult<()> {
        data.validate()?;
        self.record(
            surface,
            DrawCall::Bar {
                data: data.clone(),
                options,
            },
        );
        Ok(())
    }
}
