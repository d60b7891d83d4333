use crate::discovery::discover_modules_named;
use crate::pipeline::context::MigrationContext;
use crate::pipeline::phase_trait::MigrationPhase;
use anyhow::Result;

pub struct DiscoverPhase;

impl MigrationPhase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "DiscoverPhase"
    }

    fn execute(&self, context: &mut MigrationContext<'_>) -> Result<()> {
        let tree = discover_modules_named(context.fs, &context.project_root, &context.descriptor)?;
        context.tree = Some(tree);
        Ok(())
    }
}
