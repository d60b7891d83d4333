use crate::pipeline::context::MigrationContext;
use crate::pipeline::phase_trait::MigrationPhase;
use crate::plan::MigrationPlan;
use anyhow::{Context, Result};

pub struct GeneratePhase;

impl MigrationPhase for GeneratePhase {
    fn name(&self) -> &'static str {
        "GeneratePhase"
    }

    fn execute(&self, context: &mut MigrationContext<'_>) -> Result<()> {
        let tree = context
            .tree
            .as_ref()
            .context("Module tree must be discovered before generating files")?;
        let catalog = context
            .catalog
            .as_ref()
            .context("Catalog must be built before generating files")?;

        context.plan = Some(MigrationPlan::from_catalog(tree, catalog, context.mode));
        Ok(())
    }
}
