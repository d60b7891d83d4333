use crate::discovery::{ModuleTree, DEFAULT_DESCRIPTOR};
use crate::plan::MigrationPlan;
use gradlify_core::{FileSystem, MigrationMode};
use gradlify_gradle::VersionCatalog;
use std::path::{Path, PathBuf};

pub struct MigrationContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub project_root: PathBuf,
    pub descriptor: String,
    pub mode: MigrationMode,
    pub tree: Option<ModuleTree>,
    pub catalog: Option<VersionCatalog>,
    pub plan: Option<MigrationPlan>,
}

impl<'a> MigrationContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, project_root: &Path, mode: MigrationMode) -> Self {
        Self {
            fs,
            project_root: project_root.to_path_buf(),
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            mode,
            tree: None,
            catalog: None,
            plan: None,
        }
    }

    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = descriptor.into();
        self
    }
}
