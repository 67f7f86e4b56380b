use anyhow::Result;
use std::path::Path;

use crate::core::config::TraversalConfig;
use crate::core::graph::{DependencyGraph, GraphBuilder};
use crate::core::resolver::{ProjectSource, ResolvedProject};
use crate::core::walker::TreeWalker;

/// Merges one or more walked project trees into a single directed graph.
///
/// For a single project the result is the walker's output directly; for an
/// aggregated build every module contributes its root and subtree, and a
/// module that is itself a dependency of another module collapses to one
/// node.
pub struct GraphAssembler {
    config: TraversalConfig,
}

impl GraphAssembler {
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    pub fn assemble(&self, projects: &[ResolvedProject]) -> Result<DependencyGraph> {
        if projects.is_empty() {
            anyhow::bail!("no project trees to assemble");
        }

        let mut builder = GraphBuilder::new();
        for project in projects {
            let config = self.config.clone().with_root_group(&project.group);
            TreeWalker::new(&config).walk(project, &mut builder);
        }
        Ok(builder.build())
    }

    /// Loads and assembles in one step; a tree that cannot be obtained from
    /// the source aborts the whole invocation.
    pub fn assemble_from(&self, source: &ProjectSource, input: &Path) -> Result<DependencyGraph> {
        let projects = source.load(input)?;
        self.assemble(&projects)
    }
}
