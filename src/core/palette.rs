use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{BoardError, BoardResult};

/// Fixed ordered color sequence used for segment coloring.
///
/// Read-only after construction; lookups wrap modulo the palette length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> BoardResult<Self> {
        if colors.is_empty() {
            return Err(BoardError::InvalidData(
                "palette must not be empty".to_owned(),
            ));
        }
        Ok(Self { colors })
    }

    /// The ten-color categorical palette used by the stock dashboard.
    #[must_use]
    pub fn category10() -> Self {
        Self {
            colors: vec![
                Color::rgb(0x11, 0x3f, 0x8c), // deep blue
                Color::rgb(0x01, 0xa4, 0xa4), // teal
                Color::rgb(0x00, 0xa1, 0xcb), // cyan
                Color::rgb(0x61, 0xae, 0x24), // green
                Color::rgb(0xd0, 0xd1, 0x02), // yellow
                Color::rgb(0x32, 0x74, 0x2c), // forest
                Color::rgb(0xd7, 0x00, 0x60), // magenta
                Color::rgb(0xe5, 0x40, 0x28), // red
                Color::rgb(0xf1, 0x8d, 0x05), // orange
                Color::rgb(0x61, 0x61, 0x61), // gray
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping modulo the palette length.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::category10()
    }
}

/// Rotating cursor over a palette, shared across chart passes.
///
/// The cursor starts at zero and advances modulo the palette length once per
/// data point consumed by the passes that touch it, in encounter order across
/// all containers. It is an explicit value threaded through the engine rather
/// than process-global state, so the cross-pass coupling stays visible and
/// testable.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    palette: Palette,
    cursor: usize,
}

impl ColorAllocator {
    pub fn new(palette: Palette) -> BoardResult<Self> {
        if palette.is_empty() {
            return Err(BoardError::InvalidData(
                "color allocator requires a non-empty palette".to_owned(),
            ));
        }
        Ok(Self { palette, cursor: 0 })
    }

    /// Reads the color under the cursor, then advances it.
    pub fn allocate(&mut self) -> Color {
        let color = self.palette.color_at(self.cursor);
        self.advance();
        color
    }

    /// Advances the cursor without reading a color.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.palette.len();
    }

    /// Color under the cursor without advancing.
    #[must_use]
    pub fn peek(&self) -> Color {
        self.palette.color_at(self.cursor)
    }

    /// Current cursor position, always in `[0, palette length)`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
