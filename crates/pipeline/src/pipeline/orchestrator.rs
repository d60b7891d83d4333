use super::context::MigrationContext;
use super::phase_trait::MigrationPhase;
use super::phases::{catalog::CatalogPhase, discover::DiscoverPhase, generate::GeneratePhase};
use crate::plan::MigrationPlan;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

pub struct MigrationOrchestrator;

impl Default for MigrationOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationOrchestrator {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, context: &mut MigrationContext<'_>) -> Result<MigrationPlan> {
        let start = Instant::now();
        info!(
            project = %context.project_root.display(),
            mode = %context.mode,
            "Starting migration pipeline"
        );

        let phases: Vec<Box<dyn MigrationPhase>> = vec![
            Box::new(DiscoverPhase),
            Box::new(CatalogPhase),
            Box::new(GeneratePhase),
        ];

        for phase in phases {
            let phase_name = phase.name();
            info!(phase = %phase_name, "Starting phase");

            let phase_start = Instant::now();
            phase
                .execute(context)
                .with_context(|| format!("Phase {} failed", phase_name))?;

            info!(
                phase = %phase_name,
                duration_ms = phase_start.elapsed().as_millis(),
                "Phase complete"
            );
        }

        let plan = context
            .plan
            .take()
            .context("Pipeline finished without a migration plan")?;

        info!(
            files = plan.files.len(),
            warnings = plan.diagnostics.len(),
            total_time_ms = start.elapsed().as_millis(),
            "Migration plan ready"
        );

        Ok(plan)
    }
}
