pub mod discovery;
pub mod inspect;
pub mod pipeline;
pub mod plan;
pub mod report;

pub use discovery::{discover_modules, discover_modules_named, ModuleTree, DEFAULT_DESCRIPTOR};
pub use inspect::{ModuleSummary, ProjectReport};
pub use pipeline::context::MigrationContext;
pub use pipeline::orchestrator::MigrationOrchestrator;
pub use plan::{FileKind, GeneratedFile, MigrationPlan};
pub use report::{render_dry_run, render_summary, write_plan, WriteOutcome, WrittenFile};
