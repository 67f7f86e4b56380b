use crate::core::config::TraversalConfig;
use crate::core::exclusion::is_excluded;
use crate::core::graph::{ArtifactId, ArtifactNode, DependencyEdge, GraphBuilder};
use crate::core::resolver::{ResolvedNode, ResolvedProject};

/// Depth-first walk of one resolved project tree, feeding surviving nodes
/// and edges into a shared `GraphBuilder`.
///
/// Filters compose: a node dropped by the depth, scope, include or exclusion
/// check takes its whole subtree with it. Children are visited in resolved
/// order, so identical input always yields identical node and edge sets.
pub struct TreeWalker<'a> {
    config: &'a TraversalConfig,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self { config }
    }

    pub fn walk(&self, project: &ResolvedProject, builder: &mut GraphBuilder) {
        let root = ArtifactNode::root(project.root_id());
        let root_id = root.id.clone();
        builder.add_node(root);

        // Depth 0 is the root's direct dependencies.
        for child in &project.dependencies {
            self.descend(child, &root_id, 0, builder);
        }
    }

    fn descend(
        &self,
        node: &ResolvedNode,
        parent: &ArtifactId,
        depth: i32,
        builder: &mut GraphBuilder,
    ) {
        if !self.config.depth_allowed(depth) {
            return;
        }
        if !self.config.scope_allowed(&node.scope) {
            return;
        }
        if !self.config.group_included(&node.group) {
            return;
        }

        let artifact = ArtifactNode::dependency(node.artifact_id(), node.scope.clone());
        if is_excluded(&artifact, self.config.exclusions()) {
            return;
        }

        // Dedup by identity happens in the builder; a second path to the
        // same artifact still contributes its own parent edge.
        let id = artifact.id.clone();
        builder.add_node(artifact);
        builder.add_edge(DependencyEdge::new(
            parent.clone(),
            id.clone(),
            node.scope.clone(),
        ));

        for child in &node.dependencies {
            self.descend(child, &id, depth + 1, builder);
        }
    }
}
