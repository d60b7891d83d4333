use super::context::MigrationContext;
use anyhow::Result;

/// One step of a migration. Phases run in order and hand results to the
/// next one through the shared context.
pub trait MigrationPhase {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut MigrationContext<'_>) -> Result<()>;
}
