pub mod assembler;
pub mod config;
pub mod exclusion;
pub mod graph;
pub mod resolver;
pub mod walker;

pub use assembler::GraphAssembler;
pub use config::{ReportConfig, TraversalConfig};
pub use exclusion::{is_excluded, ExclusionRule, FieldPattern, RawExclusion};
pub use graph::{ArtifactId, ArtifactNode, DependencyEdge, DependencyGraph, GraphBuilder};
pub use resolver::{ProjectSource, ResolvedNode, ResolvedProject};
pub use walker::TreeWalker;
