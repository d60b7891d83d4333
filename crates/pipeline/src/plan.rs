use crate::discovery::ModuleTree;
use gradlify_core::MigrationMode;
use gradlify_gradle::{
    build_catalog, generate_build_file, generate_gradle_properties, generate_settings_file,
    gitignore_entries, BuildContext, VersionCatalog,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CATALOG_PATH: &str = "gradle/libs.versions.toml";
pub const SETTINGS_PATH: &str = "settings.gradle.kts";
pub const BUILD_FILE: &str = "build.gradle.kts";
pub const PROPERTIES_PATH: &str = "gradle.properties";
pub const GITIGNORE_PATH: &str = ".gitignore";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Catalog,
    Settings,
    RootBuild,
    GradleProperties,
    ModuleBuild,
    /// Merged into an existing `.gitignore` rather than overwritten.
    GitignoreAppend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative to the output directory.
    pub path: PathBuf,
    pub content: String,
    pub kind: FileKind,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, content: String, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            content,
            kind,
        }
    }

    /// Section heading used when the plan is printed instead of written.
    pub fn title(&self) -> String {
        match self.kind {
            FileKind::RootBuild => format!("{} (root)", self.path.display()),
            FileKind::GitignoreAppend => format!("{} (append)", self.path.display()),
            _ => self.path.display().to_string(),
        }
    }
}

/// Every file a migration produces, in write order.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationPlan {
    pub mode: MigrationMode,
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<String>,
}

impl MigrationPlan {
    pub fn build(tree: &ModuleTree, mode: MigrationMode) -> Self {
        let catalog = build_catalog(&tree.root, &tree.children);
        Self::from_catalog(tree, &catalog, mode)
    }

    pub fn from_catalog(tree: &ModuleTree, catalog: &VersionCatalog, mode: MigrationMode) -> Self {
        let ctx = BuildContext::new(&tree.root, &tree.children, catalog);

        let mut files = vec![
            GeneratedFile::new(CATALOG_PATH, catalog.render(), FileKind::Catalog),
            GeneratedFile::new(
                SETTINGS_PATH,
                generate_settings_file(&tree.root, &tree.children),
                FileKind::Settings,
            ),
            GeneratedFile::new(
                BUILD_FILE,
                generate_build_file(&tree.root, &ctx, true),
                FileKind::RootBuild,
            ),
            GeneratedFile::new(
                PROPERTIES_PATH,
                generate_gradle_properties(&tree.root),
                FileKind::GradleProperties,
            ),
        ];

        for child in &tree.children {
            files.push(GeneratedFile::new(
                Path::new(child.source_dir()).join(BUILD_FILE),
                generate_build_file(child, &ctx, false),
                FileKind::ModuleBuild,
            ));
        }

        if mode == MigrationMode::Overlay {
            files.push(GeneratedFile::new(
                GITIGNORE_PATH,
                gitignore_entries().to_string(),
                FileKind::GitignoreAppend,
            ));
        }

        let diagnostics = tree
            .diagnostics
            .iter()
            .chain(catalog.diagnostics())
            .cloned()
            .collect();

        Self {
            mode,
            files,
            diagnostics,
        }
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }
}
