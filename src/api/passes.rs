use tracing::{debug, warn};

use crate::core::{ChartKind, Segment, SegmentDataset, SeriesData, SeriesStyle};
use crate::error::{BoardError, BoardResult};
use crate::markup::{ChartContainer, ChartDocument};
use crate::render::ChartRenderer;

use super::ChartBoard;

/// Summary of one `render_document` run.
///
/// Failures are collected per container; one bad container never aborts its
/// siblings or later kinds.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub rendered: Vec<String>,
    pub failures: Vec<ContainerFailure>,
}

impl RenderReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// A container that failed to render.
#[derive(Debug)]
pub struct ContainerFailure {
    pub container: String,
    pub error: BoardError,
}

impl<R: ChartRenderer> ChartBoard<R> {
    /// Runs every chart pass over the document.
    ///
    /// Kinds are processed in `ChartKind::PASS_ORDER`, containers of one kind
    /// in document order, points within one container in document order. The
    /// shared color cursor carries across passes, so this order is part of
    /// the color-assignment contract.
    pub fn render_document(&mut self, document: &mut ChartDocument) -> RenderReport {
        let mut report = RenderReport::default();
        for kind in ChartKind::PASS_ORDER {
            self.run_kind_pass(document, kind, &mut report);
        }
        debug!(
            rendered = report.rendered_count(),
            failed = report.failure_count(),
            cursor = self.allocator.cursor(),
            "chart pass complete"
        );
        report
    }

    fn run_kind_pass(
        &mut self,
        document: &mut ChartDocument,
        kind: ChartKind,
        report: &mut RenderReport,
    ) {
        for container in &mut document.containers {
            if container.kind != kind {
                continue;
            }
            let outcome = match kind {
                ChartKind::Doughnut => self.render_doughnut(container),
                _ => self.render_series(container, kind),
            };
            match outcome {
                Ok(()) => report.rendered.push(container.id.clone()),
                Err(error) => {
                    warn!(
                        container = %container.id,
                        kind = %kind,
                        error = %error,
                        "skipping container"
                    );
                    report.failures.push(ContainerFailure {
                        container: container.id.clone(),
                        error,
                    });
                }
            }
        }
    }

    /// Doughnut pass: assign one palette color per point, paint the legend
    /// swatch, and build value/color segments.
    ///
    /// The surface is resolved before any point is consumed, so a container
    /// without one fails without shifting the cursor for later containers.
    fn render_doughnut(&mut self, container: &mut ChartContainer) -> BoardResult<()> {
        let surface = container.require_surface()?.clone();
        let mut dataset = SegmentDataset::with_capacity(container.points.len());
        for point in &mut container.points {
            let color = self.allocator.allocate();
            point.legend_color = Some(color);
            dataset.push(Segment {
                value: point.value,
                color,
            });
        }
        debug!(
            container = %container.id,
            segments = dataset.len(),
            cursor = self.allocator.cursor(),
            "assembled doughnut dataset"
        );
        self.renderer
            .draw_doughnut(&surface, &dataset, self.config.doughnut_options)
    }

    /// Shared extraction for line, radar, and bar: parallel labels/values
    /// wrapped into one styled dataset. The bar-only cursor rotation is the
    /// single kind-specific step inside the loop.
    fn render_series(&mut self, container: &ChartContainer, kind: ChartKind) -> BoardResult<()> {
        let surface = container.require_surface()?.clone();
        let mut labels = Vec::with_capacity(container.points.len());
        let mut values = Vec::with_capacity(container.points.len());
        for point in &container.points {
            labels.push(point.label());
            values.push(point.value);
            if kind == ChartKind::Bar && self.config.legacy_bar_cursor_advance {
                self.allocator.advance();
            }
        }
        let data = SeriesData::single(labels, values, SeriesStyle::for_kind(kind));
        debug!(
            container = %container.id,
            kind = %kind,
            points = data.point_count(),
            "assembled series dataset"
        );
        let options = self.config.series_options;
        match kind {
            ChartKind::Line => self.renderer.draw_line(&surface, &data, options),
            ChartKind::Radar => self.renderer.draw_radar(&surface, &data, options),
            ChartKind::Bar => self.renderer.draw_bar(&surface, &data, options),
            ChartKind::Doughnut => Err(BoardError::InvalidData(
                "doughnut containers use segment datasets".to_owned(),
            )),
        }
    }
}
