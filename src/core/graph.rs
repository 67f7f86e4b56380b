use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    Directed, Graph,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Artifact identity: the dedup key for the whole graph. Two artifacts with
/// the same coordinates collapse to one node no matter how many dependency
/// paths reach them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    pub group: String,
    pub name: String,
    pub version: String,
    pub packaging: String,
    pub classifier: Option<String>,
}

impl ArtifactId {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            packaging: "jar".to_string(),
            classifier: None,
        }
    }

    pub fn with_packaging(mut self, packaging: &str) -> Self {
        self.packaging = packaging.to_string();
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    /// Full coordinate string: `group:name:packaging[:classifier]:version`.
    pub fn coordinate(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}:{}",
                self.group, self.name, self.packaging, classifier, self.version
            ),
            None => format!(
                "{}:{}:{}:{}",
                self.group, self.name, self.packaging, self.version
            ),
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactNode {
    pub id: ArtifactId,
    /// Resolution scope; `None` for root project nodes.
    pub scope: Option<String>,
    pub is_root: bool,
}

impl ArtifactNode {
    pub fn root(id: ArtifactId) -> Self {
        Self {
            id,
            scope: None,
            is_root: true,
        }
    }

    pub fn dependency(id: ArtifactId, scope: String) -> Self {
        Self {
            id,
            scope: Some(scope),
            is_root: false,
        }
    }
}

/// Directed consumer -> dependency relationship, labeled with the scope the
/// dependency was resolved under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: ArtifactId,
    pub to: ArtifactId,
    pub scope: String,
}

impl DependencyEdge {
    pub fn new(from: ArtifactId, to: ArtifactId, scope: String) -> Self {
        Self { from, to, scope }
    }
}

pub type DependencyGraph = Graph<ArtifactNode, DependencyEdge, Directed>;

/// Identity-keyed graph accumulator. Nodes are deduplicated by `ArtifactId`,
/// edges by their endpoint pair (parallel edges exist only between distinct
/// parent/child pairs, first scope wins); self loops are dropped.
pub struct GraphBuilder {
    graph: DependencyGraph,
    node_map: HashMap<ArtifactId, NodeIndex>,
    edge_keys: HashSet<(NodeIndex, NodeIndex)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
            edge_keys: HashSet::new(),
        }
    }

    /// Registers a node, returning the index of the already-present node when
    /// the identity was reached before. A root registration wins over an
    /// earlier dependency registration of the same module (aggregated builds
    /// may walk a module after another module already pulled it in).
    pub fn add_node(&mut self, node: ArtifactNode) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&node.id) {
            if node.is_root {
                self.graph[index].is_root = true;
                self.graph[index].scope = None;
            }
            return index;
        }
        let id = node.id.clone();
        let index = self.graph.add_node(node);
        self.node_map.insert(id, index);
        index
    }

    /// Adds an edge between two registered nodes. Returns `None` when either
    /// endpoint is missing, when the edge would be a self loop, or when an
    /// edge between the same pair already exists.
    pub fn add_edge(&mut self, edge: DependencyEdge) -> Option<EdgeIndex> {
        let source = *self.node_map.get(&edge.from)?;
        let target = *self.node_map.get(&edge.to)?;
        if source == target {
            return None;
        }
        if !self.edge_keys.insert((source, target)) {
            return None;
        }
        Some(self.graph.add_edge(source, target, edge))
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    pub fn node_index(&self, id: &ArtifactId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
