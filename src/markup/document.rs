use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, Color};
use crate::error::{BoardError, BoardResult};

/// Rendering surface declared inside a chart container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: String,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One data point declared in markup.
///
/// `value` is required for every kind; `name` feeds the labels sequence of
/// line, radar, and bar charts and is ignored by doughnut charts, which
/// instead receive a palette color into `legend_color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupPoint {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Filled by the doughnut pass when a palette color is applied to the
    /// point's legend swatch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_color: Option<Color>,
}

impl MarkupPoint {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            name: None,
            legend_color: None,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            name: Some(name.into()),
            legend_color: None,
        }
    }

    /// Label contributed to series datasets; unnamed points contribute an
    /// empty label.
    #[must_use]
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

/// A page region declaring one chart instance and its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartContainer {
    pub id: String,
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<Surface>,
    #[serde(default)]
    pub points: Vec<MarkupPoint>,
}

impl ChartContainer {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            id: id.into(),
            kind,
            surface: None,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: MarkupPoint) -> Self {
        self.points.push(point);
        self
    }

    pub fn push_point(&mut self, point: MarkupPoint) {
        self.points.push(point);
    }

    /// Resolves the rendering surface, failing with `MissingSurface` when the
    /// container declares none.
    pub fn require_surface(&self) -> BoardResult<&Surface> {
        self.surface.as_ref().ok_or_else(|| BoardError::MissingSurface {
            container: self.id.clone(),
        })
    }
}

/// The declarative chart markup of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    #[serde(default)]
    pub containers: Vec<ChartContainer>,
}

impl ChartDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_container(mut self, container: ChartContainer) -> Self {
        self.containers.push(container);
        self
    }

    pub fn push_container(&mut self, container: ChartContainer) {
        self.containers.push(container);
    }

    /// Containers of one kind, in document order.
    pub fn containers_of_kind(&self, kind: ChartKind) -> impl Iterator<Item = &ChartContainer> {
        self.containers
            .iter()
            .filter(move |container| container.kind == kind)
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.containers
            .iter()
            .map(|container| container.points.len())
            .sum()
    }

    pub fn validate(&self) -> BoardResult<()> {
        for container in &self.containers {
            if container.id.is_empty() {
                return Err(BoardError::InvalidData(
                    "container id must not be empty".to_owned(),
                ));
            }
            for (index, point) in container.points.iter().enumerate() {
                if !point.value.is_finite() {
                    return Err(BoardError::InvalidData(format!(
                        "container `{}` point {index} value must be finite",
                        container.id
                    )));
                }
            }
        }
        Ok(())
    }
}
