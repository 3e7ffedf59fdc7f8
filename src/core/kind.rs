use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart variants recognized in dashboard markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Doughnut,
    Line,
    Radar,
    Bar,
}

impl ChartKind {
    /// Pass order over a document.
    ///
    /// Doughnut and bar passes consume the shared color cursor, so this order
    /// is part of the color-assignment contract and must not change.
    pub const PASS_ORDER: [Self; 4] = [Self::Doughnut, Self::Line, Self::Radar, Self::Bar];

    /// Kinds that read point names into a labels sequence.
    #[must_use]
    pub const fn uses_labels(self) -> bool {
        !matches!(self, Self::Doughnut)
    }

    /// Kinds whose pass advances the shared color cursor.
    #[must_use]
    pub const fn advances_color_cursor(self) -> bool {
        matches!(self, Self::Doughnut | Self::Bar)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doughnut => "doughnut",
            Self::Line => "line",
            Self::Radar => "radar",
            Self::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
