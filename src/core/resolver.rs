use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::graph::ArtifactId;

fn default_packaging() -> String {
    "jar".to_string()
}

fn default_scope() -> String {
    "compile".to_string()
}

/// A dependency as resolved by the host build tool. Version and scope are
/// already settled upstream; this layer performs no resolution of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedNode {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default)]
    pub dependencies: Vec<ResolvedNode>,
}

impl ResolvedNode {
    pub fn artifact_id(&self) -> ArtifactId {
        ArtifactId {
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            packaging: self.packaging.clone(),
            classifier: self.classifier.clone(),
        }
    }
}

/// One project (or module of an aggregated build) with its resolved
/// dependency tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedProject {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default = "default_packaging")]
    pub packaging: String,
    #[serde(default)]
    pub dependencies: Vec<ResolvedNode>,
}

impl ResolvedProject {
    pub fn root_id(&self) -> ArtifactId {
        ArtifactId {
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            packaging: self.packaging.clone(),
            classifier: None,
        }
    }
}

/// Loads resolved project trees from disk.
pub struct ProjectSource;

impl ProjectSource {
    pub fn new() -> Self {
        Self
    }

    /// Loads every project tree reachable from `input`: a single tree file,
    /// or a directory holding one `*.deps.json` per module (aggregated
    /// build). Any unreadable or malformed tree is a hard error; a partial
    /// graph is never silently substituted.
    pub fn load(&self, input: &Path) -> Result<Vec<ResolvedProject>> {
        if input.is_dir() {
            self.load_aggregated(input)
        } else {
            Ok(vec![self.load_file(input)?])
        }
    }

    fn load_file(&self, path: &Path) -> Result<ResolvedProject> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dependency tree {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed dependency tree {}", path.display()))
    }

    fn load_aggregated(&self, dir: &Path) -> Result<Vec<ResolvedProject>> {
        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(".deps.json"))
            })
            .map(|entry| entry.path().to_path_buf())
            .collect();
        // Stable module order keeps repeated runs identical.
        files.sort();

        if files.is_empty() {
            anyhow::bail!("no *.deps.json module trees found under {}", dir.display());
        }
        files.iter().map(|path| self.load_file(path)).collect()
    }
}

impl Default for ProjectSource {
    fn default() -> Self {
        Self::new()
    }
}
