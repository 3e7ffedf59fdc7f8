pub mod color;
pub mod dataset;
pub mod kind;
pub mod palette;

pub use color::Color;
pub use dataset::{Segment, SegmentDataset, SeriesData, SeriesDataset, SeriesStyle};
pub use kind::ChartKind;
pub use palette::{ColorAllocator, Palette};
