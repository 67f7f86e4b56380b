//! # DEPVIEW
//!
//! Dependency overview graph reports for resolved build dependency trees.
//!
//! DEPVIEW takes the dependency tree a build tool has already resolved,
//! filters it by group, scope, depth and exclusion rules, and assembles a
//! directed artifact graph ready to be rendered into a report page.
//!
//! ## Pipeline
//!
//! - **Load**: one project tree, or every module tree of an aggregated build
//! - **Walk**: depth-first traversal applying include/scope/depth filters and
//!   exclusion rules
//! - **Assemble**: merge per-module results into one deduplicated graph
//! - **Render**: annotate nodes and edges with labels/colors/shapes and hand
//!   the graph to a rendering collaborator

pub mod core;
pub mod render;
