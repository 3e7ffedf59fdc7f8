pub mod document;

pub use document::{ChartContainer, ChartDocument, MarkupPoint, Surface};
