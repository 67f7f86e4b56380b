use anyhow::Result;

use crate::core::exclusion::{ExclusionRule, RawExclusion};

/// Filters applied while walking a resolved dependency tree. Built once per
/// invocation from user parameters and passed explicitly into the walker.
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    includes: Vec<String>,
    max_depth: i32,
    scopes: Vec<String>,
    exclusions: Vec<ExclusionRule>,
}

impl TraversalConfig {
    /// Parses the raw user parameters, compiling exclusion patterns up front.
    ///
    /// `includes` is a comma-separated list of group prefixes; empty means no
    /// group restriction. `max_depth` is unbounded when negative. An empty
    /// `scopes` slice allows every scope.
    pub fn new(
        includes: &str,
        max_depth: i32,
        scopes: &[String],
        exclusions: &[RawExclusion],
    ) -> Result<Self> {
        let includes = includes
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        let exclusions = exclusions
            .iter()
            .map(ExclusionRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            includes,
            max_depth,
            scopes: scopes.to_vec(),
            exclusions,
        })
    }

    pub fn unrestricted() -> Self {
        Self {
            includes: Vec::new(),
            max_depth: -1,
            scopes: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    /// The root project's own group is always traversed, even when an
    /// includes list is configured without it.
    pub fn with_root_group(mut self, group: &str) -> Self {
        if !self.includes.is_empty() && !self.includes.iter().any(|include| include == group) {
            self.includes.push(group.to_string());
        }
        self
    }

    /// Boundary inclusive: a node sitting exactly at `max_depth` is kept,
    /// its children are not.
    pub fn depth_allowed(&self, depth: i32) -> bool {
        self.max_depth < 0 || depth <= self.max_depth
    }

    pub fn scope_allowed(&self, scope: &str) -> bool {
        self.scopes.is_empty() || self.scopes.iter().any(|allowed| allowed == scope)
    }

    pub fn group_included(&self, group: &str) -> bool {
        self.includes.is_empty()
            || self
                .includes
                .iter()
                .any(|include| group.starts_with(include.as_str()))
    }

    pub fn exclusions(&self) -> &[ExclusionRule] {
        &self.exclusions
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }
}

/// Presentation parameters for the generated report: everything the
/// rendering side needs, separate from the traversal filters.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Page and image file stem under the report output directory.
    pub report_name: String,
    /// Rendered graph width in pixels.
    pub width: u32,
    /// Rendered graph height in pixels.
    pub height: u32,
    /// Show artifact versions in vertex labels.
    pub show_version: bool,
    /// Use full coordinates as vertex labels.
    pub full_label: bool,
    /// Scopes that are not shown as edge labels.
    pub suppressed_scopes: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_name: "overview".to_string(),
            width: 1200,
            height: 1200,
            show_version: false,
            full_label: false,
            suppressed_scopes: vec!["compile".to_string()],
        }
    }
}
