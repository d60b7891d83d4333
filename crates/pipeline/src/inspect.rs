//! Read-only view of a module tree, for `gradlify inspect`.

use crate::discovery::ModuleTree;
use gradlify_gradle::build_catalog;
use gradlify_maven::Module;
use gradlify_stack::TechStack;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub artifact_id: String,
    pub source_dir: String,
    pub packaging: String,
    pub dependencies: usize,
    pub plugins: usize,
    pub profiles: usize,
}

impl From<&Module> for ModuleSummary {
    fn from(module: &Module) -> Self {
        Self {
            artifact_id: module.artifact_id.clone(),
            source_dir: module.source_dir().to_string(),
            packaging: module.packaging.clone(),
            dependencies: module.dependencies.len(),
            plugins: module.plugins.len(),
            profiles: module.profiles.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub modules: Vec<ModuleSummary>,
    pub stack: TechStack,
    pub catalog_versions: usize,
    pub catalog_libraries: usize,
    pub catalog_plugins: usize,
    pub diagnostics: Vec<String>,
}

impl ProjectReport {
    pub fn from_tree(tree: &ModuleTree) -> Self {
        let catalog = build_catalog(&tree.root, &tree.children);
        Self {
            group_id: tree.root.group_id.clone(),
            artifact_id: tree.root.artifact_id.clone(),
            version: tree.root.version.clone(),
            modules: tree.modules().map(ModuleSummary::from).collect(),
            stack: TechStack::detect(&tree.root, &tree.children),
            catalog_versions: catalog.versions().len(),
            catalog_libraries: catalog.libraries().len(),
            catalog_plugins: catalog.plugins().len(),
            diagnostics: tree
                .diagnostics
                .iter()
                .chain(catalog.diagnostics())
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for ProjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Project: {}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or("-")
        )?;
        writeln!(f)?;
        writeln!(f, "Modules ({}):", self.modules.len())?;
        for module in &self.modules {
            writeln!(
                f,
                "  {:<30} {:<6} {} deps, {} plugins, {} profiles  [{}]",
                module.artifact_id,
                module.packaging,
                module.dependencies,
                module.plugins,
                module.profiles,
                module.source_dir
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Technology:")?;
        writeln!(
            f,
            "  Java:        {}",
            self.stack.java_version.as_deref().unwrap_or("not detected")
        )?;
        writeln!(
            f,
            "  Kotlin:      {}",
            self.stack.kotlin_version.as_deref().unwrap_or("no")
        )?;
        let spring_boot = match (&self.stack.spring_boot, &self.stack.spring_boot_version) {
            (true, Some(version)) => version.as_str(),
            (true, None) => "yes",
            (false, _) => "no",
        };
        writeln!(f, "  Spring Boot: {}", spring_boot)?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog: {} versions, {} libraries, {} plugins",
            self.catalog_versions, self.catalog_libraries, self.catalog_plugins
        )?;
        if !self.diagnostics.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings ({}):", self.diagnostics.len())?;
            for diagnostic in &self.diagnostics {
                writeln!(f, "  - {}", diagnostic)?;
            }
        }
        Ok(())
    }
}
