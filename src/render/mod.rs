pub mod dot;
pub mod report;
pub mod style;

use anyhow::Result;

use crate::core::DependencyGraph;
use style::GraphStyle;

pub use dot::DotRenderer;
pub use report::ReportGenerator;
pub use style::{EdgeStyler, VertexStyler};

/// Rendering collaborator: a finished graph plus its style annotations in,
/// image bytes out. Layout and pixel encoding live behind this seam so the
/// backing library stays interchangeable.
pub trait GraphRenderer {
    fn render(&self, graph: &DependencyGraph, style: &GraphStyle) -> Result<Vec<u8>>;

    /// File extension of the produced image format, without the dot.
    fn file_extension(&self) -> &'static str;
}
