use crate::core::{ArtifactNode, DependencyEdge, ReportConfig};

/// Maps artifact nodes to display attributes. Read-only annotation; produces
/// no new graph structure.
pub struct VertexStyler {
    full_label: bool,
    show_version: bool,
}

impl VertexStyler {
    pub fn new(full_label: bool, show_version: bool) -> Self {
        Self {
            full_label,
            show_version,
        }
    }

    pub fn label(&self, node: &ArtifactNode) -> String {
        if self.full_label {
            node.id.coordinate()
        } else if self.show_version {
            format!("{} {}", node.id.name, node.id.version)
        } else {
            node.id.name.clone()
        }
    }

    pub fn fill_color(&self, node: &ArtifactNode) -> &'static str {
        if node.is_root {
            return "#b3cde3";
        }
        match node.scope.as_deref() {
            Some("test") => "#fff2ae",
            Some("provided") => "#e6e6e6",
            Some("runtime") => "#ccebc5",
            _ => "#ffffff",
        }
    }

    pub fn shape(&self, node: &ArtifactNode) -> &'static str {
        if node.is_root {
            "box"
        } else {
            "ellipse"
        }
    }
}

/// Maps dependency edges to optional labels; suppressed scopes get none.
pub struct EdgeStyler {
    suppressed_scopes: Vec<String>,
}

impl EdgeStyler {
    pub fn new(suppressed_scopes: &[String]) -> Self {
        Self {
            suppressed_scopes: suppressed_scopes.to_vec(),
        }
    }

    pub fn label<'a>(&self, edge: &'a DependencyEdge) -> Option<&'a str> {
        if self
            .suppressed_scopes
            .iter()
            .any(|scope| scope == &edge.scope)
        {
            None
        } else {
            Some(&edge.scope)
        }
    }
}

/// Bundle of everything a renderer needs besides the graph itself.
pub struct GraphStyle {
    pub vertices: VertexStyler,
    pub edges: EdgeStyler,
    pub width: u32,
    pub height: u32,
}

impl GraphStyle {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            vertices: VertexStyler::new(config.full_label, config.show_version),
            edges: EdgeStyler::new(&config.suppressed_scopes),
            width: config.width,
            height: config.height,
        }
    }
}
