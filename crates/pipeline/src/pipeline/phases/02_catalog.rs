use crate::pipeline::context::MigrationContext;
use crate::pipeline::phase_trait::MigrationPhase;
use anyhow::{Context, Result};
use gradlify_gradle::build_catalog;

pub struct CatalogPhase;

impl MigrationPhase for CatalogPhase {
    fn name(&self) -> &'static str {
        "CatalogPhase"
    }

    fn execute(&self, context: &mut MigrationContext<'_>) -> Result<()> {
        let tree = context
            .tree
            .as_ref()
            .context("Module tree must be discovered before building the catalog")?;
        context.catalog = Some(build_catalog(&tree.root, &tree.children));
        Ok(())
    }
}
