use crate::core::ColorAllocator;
use crate::error::BoardResult;
use crate::render::ChartRenderer;

use super::ChartBoardConfig;

/// Chart data aggregator/renderer over one rendering backend.
///
/// Owns the shared color allocator consumed by the doughnut and bar passes,
/// so color assignment is a property of the board instance rather than
/// process-global state.
pub struct ChartBoard<R: ChartRenderer> {
    pub(super) renderer: R,
    pub(super) config: ChartBoardConfig,
    pub(super) allocator: ColorAllocator,
}

impl<R: ChartRenderer> ChartBoard<R> {
    pub fn new(renderer: R, config: ChartBoardConfig) -> BoardResult<Self> {
        let allocator = ColorAllocator::new(config.palette.clone())?;
        Ok(Self {
            renderer,
            config,
            allocator,
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &ChartBoardConfig {
        &self.config
    }

    /// Current position of the shared color cursor.
    #[must_use]
    pub fn color_cursor(&self) -> usize {
        self.allocator.cursor()
    }

    /// Rewinds the shared color cursor to the start of the palette.
    pub fn reset_color_cursor(&mut self) {
        self.allocator.reset();
    }
}
