use anyhow::Result;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

use super::style::GraphStyle;
use super::GraphRenderer;
use crate::core::DependencyGraph;

/// Graphviz DOT collaborator: emits the annotated graph as DOT source.
/// Force-directed layout and rasterization are left to whatever consumes it.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &DependencyGraph, style: &GraphStyle) -> Result<Vec<u8>> {
        let mut out = String::new();
        writeln!(out, "digraph overview {{")?;
        // DOT sizes are inches; pixel hints assume 96 dpi.
        writeln!(
            out,
            "  size=\"{:.2},{:.2}!\";",
            f64::from(style.width) / 96.0,
            f64::from(style.height) / 96.0
        )?;
        writeln!(out, "  node [fontsize=10];")?;

        for index in graph.node_indices() {
            let node = &graph[index];
            writeln!(
                out,
                "  n{} [label=\"{}\", shape={}, style=filled, fillcolor=\"{}\"];",
                index.index(),
                escape(&style.vertices.label(node)),
                style.vertices.shape(node),
                style.vertices.fill_color(node)
            )?;
        }

        for edge in graph.edge_references() {
            match style.edges.label(edge.weight()) {
                Some(label) => writeln!(
                    out,
                    "  n{} -> n{} [label=\"{}\"];",
                    edge.source().index(),
                    edge.target().index(),
                    escape(label)
                )?,
                None => writeln!(
                    out,
                    "  n{} -> n{};",
                    edge.source().index(),
                    edge.target().index()
                )?,
            }
        }

        writeln!(out, "}}")?;
        Ok(out.into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "dot"
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
