use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Color};
use crate::error::{BoardError, BoardResult};

const SERIES_FILL: Color = Color::rgba(220, 220, 220, 0.5);
const SERIES_STROKE: Color = Color::rgba(220, 220, 220, 1.0);
const SERIES_POINT: Color = Color::rgba(220, 220, 220, 1.0);
const SERIES_POINT_STROKE: Color = Color::rgb(255, 255, 255);

/// One doughnut segment: a value plus its palette-assigned color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub value: f64,
    pub color: Color,
}

/// Dataset consumed by the doughnut mode: ordered value/color segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentDataset {
    pub segments: Vec<Segment>,
}

impl SegmentDataset {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn validate(&self) -> BoardResult<()> {
        for (index, segment) in self.segments.iter().enumerate() {
            if !segment.value.is_finite() {
                return Err(BoardError::InvalidData(format!(
                    "segment {index} value must be finite"
                )));
            }
            segment.color.validate()?;
        }
        Ok(())
    }
}

/// Fixed visual styling applied to a series dataset.
///
/// The constants are literal, never palette-derived. Bar series carry no
/// point markers, so their point colors are absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub fill_color: Color,
    pub stroke_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_stroke_color: Option<Color>,
}

impl SeriesStyle {
    /// Style for line and radar series, with point markers.
    #[must_use]
    pub const fn with_point_markers() -> Self {
        Self {
            fill_color: SERIES_FILL,
            stroke_color: SERIES_STROKE,
            point_color: Some(SERIES_POINT),
            point_stroke_color: Some(SERIES_POINT_STROKE),
        }
    }

    /// Style for bar series, without point markers.
    #[must_use]
    pub const fn without_point_markers() -> Self {
        Self {
            fill_color: SERIES_FILL,
            stroke_color: SERIES_STROKE,
            point_color: None,
            point_stroke_color: None,
        }
    }

    #[must_use]
    pub const fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self::without_point_markers(),
            _ => Self::with_point_markers(),
        }
    }
}

/// One styled value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset {
    pub style: SeriesStyle,
    pub values: Vec<f64>,
}

/// Dataset consumed by the line, radar, and bar modes: a labels sequence
/// paired with one or more value series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesDataset>,
}

impl SeriesData {
    /// Wraps parallel labels/values into a single styled dataset.
    #[must_use]
    pub fn single(labels: Vec<String>, values: Vec<f64>, style: SeriesStyle) -> Self {
        Self {
            labels,
            datasets: vec![SeriesDataset { style, values }],
        }
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    pub fn validate(&self) -> BoardResult<()> {
        for (index, dataset) in self.datasets.iter().enumerate() {
            if dataset.values.len() != self.labels.len() {
                return Err(BoardError::InvalidData(format!(
                    "dataset {index} has {} values for {} labels",
                    dataset.values.len(),
                    self.labels.len()
                )));
            }
            if let Some(position) = dataset.values.iter().position(|value| !value.is_finite()) {
                return Err(BoardError::InvalidData(format!(
                    "dataset {index} value {position} must be finite"
                )));
            }
        }
        Ok(())
    }
}
