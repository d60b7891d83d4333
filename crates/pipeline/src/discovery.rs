//! Module tree discovery
//!
//! Walks `<modules>` depth-first from the root descriptor. Only the root is
//! mandatory: children that are missing or fail to parse are reported and
//! skipped so that their siblings still convert.

use gradlify_core::{FileSystem, MigrationError};
use gradlify_maven::{parse_pom, parse_pom_file, Module};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_DESCRIPTOR: &str = "pom.xml";

/// The parsed root module and every reachable child, flattened in
/// depth-first order. Each child's `source_dir` is its `/`-joined path
/// relative to the project root.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleTree {
    pub root: Module,
    pub children: Vec<Module>,
    pub diagnostics: Vec<String>,
}

impl ModuleTree {
    pub fn is_multi_module(&self) -> bool {
        !self.root.modules.is_empty()
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        std::iter::once(&self.root).chain(self.children.iter())
    }
}

pub fn discover_modules(
    fs: &dyn FileSystem,
    project_root: &Path,
) -> Result<ModuleTree, MigrationError> {
    discover_modules_named(fs, project_root, DEFAULT_DESCRIPTOR)
}

/// Same as [`discover_modules`] with a custom descriptor file name.
pub fn discover_modules_named(
    fs: &dyn FileSystem,
    project_root: &Path,
    descriptor: &str,
) -> Result<ModuleTree, MigrationError> {
    if !fs.is_dir(project_root) {
        return Err(MigrationError::MissingProject {
            path: project_root.to_path_buf(),
        });
    }

    let root_path = project_root.join(descriptor);
    if !fs.is_file(&root_path) {
        return Err(MigrationError::MissingRootDescriptor { path: root_path });
    }

    let content = fs
        .read_to_string(&root_path)
        .map_err(|source| MigrationError::Io {
            path: root_path.clone(),
            source,
        })?;
    let mut root = parse_pom(&content).map_err(|e| MigrationError::InvalidDescriptor {
        path: root_path.clone(),
        message: format!("{:#}", e),
    })?;
    root.source_dir = Some(".".to_string());

    let mut walker = Walker {
        fs,
        project_root,
        descriptor,
        visited: HashSet::new(),
        children: Vec::new(),
        diagnostics: Vec::new(),
    };
    let root_key = walker.key(project_root);
    walker.visited.insert(root_key);
    let module_dirs = root.modules.clone();
    walker.walk(&module_dirs, "");

    info!(
        root = %root.artifact_id,
        children = walker.children.len(),
        "Discovered module tree"
    );

    Ok(ModuleTree {
        root,
        children: walker.children,
        diagnostics: walker.diagnostics,
    })
}

struct Walker<'a> {
    fs: &'a dyn FileSystem,
    project_root: &'a Path,
    descriptor: &'a str,
    visited: HashSet<PathBuf>,
    children: Vec<Module>,
    diagnostics: Vec<String>,
}

impl Walker<'_> {
    /// Canonical path when the directory exists, lexically normalized otherwise.
    fn key(&self, dir: &Path) -> PathBuf {
        self.fs
            .canonicalize(dir)
            .unwrap_or_else(|_| lexical_normalize(dir))
    }

    fn walk(&mut self, module_dirs: &[String], parent: &str) {
        for dir in module_dirs {
            let relative = if parent.is_empty() {
                dir.clone()
            } else {
                format!("{}/{}", parent, dir)
            };
            let dir_path = self.project_root.join(&relative);

            let key = self.key(&dir_path);
            if !self.visited.insert(key) {
                debug!(module = %relative, "Module already visited, skipping");
                continue;
            }

            let descriptor_path = dir_path.join(self.descriptor);
            if !self.fs.is_file(&descriptor_path) {
                self.warn(format!(
                    "Module '{}' has no {}, skipping",
                    relative, self.descriptor
                ));
                continue;
            }

            match parse_pom_file(self.fs, &descriptor_path) {
                Ok(mut child) => {
                    debug!(module = %relative, artifact = %child.artifact_id, "Parsed module");
                    child.source_dir = Some(relative.clone());
                    let nested = child.modules.clone();
                    self.children.push(child);
                    self.walk(&nested, &relative);
                }
                Err(e) => self.warn(format!(
                    "Module '{}' could not be parsed ({:#}), skipping",
                    relative, e
                )),
            }
        }
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.diagnostics.push(message);
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
