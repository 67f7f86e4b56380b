use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

use crate::core::graph::ArtifactNode;

/// One field of an exclusion rule: unconstrained, or a compiled pattern that
/// must match (partially) for the rule to apply.
#[derive(Debug, Clone)]
pub enum FieldPattern {
    Any,
    Matches(Regex),
}

impl FieldPattern {
    fn compile(raw: Option<&str>, field: &str) -> Result<Self> {
        match raw {
            None => Ok(FieldPattern::Any),
            Some(pattern) => Regex::new(pattern)
                .map(FieldPattern::Matches)
                .with_context(|| format!("invalid exclusion {field} pattern: {pattern}")),
        }
    }

    fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            FieldPattern::Any => true,
            // A constrained field never matches an attribute the node does
            // not carry (root projects have no scope).
            FieldPattern::Matches(regex) => value.is_some_and(|v| regex.is_match(v)),
        }
    }
}

/// Exclusion rule as configured by the user, before pattern compilation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawExclusion {
    pub group: Option<String>,
    pub name: Option<String>,
    pub packaging: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
}

/// Compiled exclusion rule. All present fields must match for the rule to
/// exclude a node; absent fields are wildcards.
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    group: FieldPattern,
    name: FieldPattern,
    packaging: FieldPattern,
    version: FieldPattern,
    scope: FieldPattern,
}

impl ExclusionRule {
    /// Fails fast on malformed patterns so that a bad rule surfaces as a
    /// configuration error instead of silently never matching.
    pub fn compile(raw: &RawExclusion) -> Result<Self> {
        Ok(Self {
            group: FieldPattern::compile(raw.group.as_deref(), "group")?,
            name: FieldPattern::compile(raw.name.as_deref(), "name")?,
            packaging: FieldPattern::compile(raw.packaging.as_deref(), "packaging")?,
            version: FieldPattern::compile(raw.version.as_deref(), "version")?,
            scope: FieldPattern::compile(raw.scope.as_deref(), "scope")?,
        })
    }

    pub fn matches(&self, node: &ArtifactNode) -> bool {
        self.group.accepts(Some(&node.id.group))
            && self.name.accepts(Some(&node.id.name))
            && self.packaging.accepts(Some(&node.id.packaging))
            && self.version.accepts(Some(&node.id.version))
            && self.scope.accepts(node.scope.as_deref())
    }
}

/// A node is excluded when at least one rule in the set matches it.
pub fn is_excluded(node: &ArtifactNode, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule.matches(node))
}
