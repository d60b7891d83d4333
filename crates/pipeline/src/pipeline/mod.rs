pub mod context;
pub mod orchestrator;
pub mod phase_trait;
pub mod phases;

pub use context::MigrationContext;
pub use orchestrator::MigrationOrchestrator;
pub use phase_trait::MigrationPhase;
