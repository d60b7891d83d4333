//! Output formatting for migrate and inspect results
//!
//! Human output is what a person reads in a terminal; JSON carries the same
//! data for scripts.

use anyhow::Result;
use gradlify_core::{MigrationMode, OutputFormat};
use gradlify_pipeline::{render_dry_run, render_summary, MigrationPlan, ProjectReport, WrittenFile};
use serde::Serialize;
use std::path::Path;

pub struct OutputFormatter {
    format: OutputFormat,
}

#[derive(Serialize)]
struct WriteResult<'a> {
    mode: MigrationMode,
    output_dir: &'a Path,
    files: &'a [WrittenFile],
    diagnostics: &'a [String],
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_dry_run(&self, plan: &MigrationPlan) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(render_dry_run(plan)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        }
    }

    pub fn format_written(
        &self,
        plan: &MigrationPlan,
        written: &[WrittenFile],
        output_dir: &Path,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(render_summary(plan, written, output_dir)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&WriteResult {
                mode: plan.mode,
                output_dir,
                files: written,
                diagnostics: &plan.diagnostics,
            })?),
        }
    }

    pub fn format_report(&self, report: &ProjectReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradlify_core::MockFileSystem;
    use gradlify_pipeline::{discover_modules, ModuleTree};

    fn tree() -> ModuleTree {
        let fs = MockFileSystem::new();
        fs.add_file(
            "demo/pom.xml",
            "<project><groupId>com.example</groupId>\
             <artifactId>demo</artifactId><version>1.0</version></project>",
        );
        discover_modules(&fs, Path::new("/mock/demo")).unwrap()
    }

    #[test]
    fn test_json_dry_run_lists_files() {
        let plan = MigrationPlan::build(&tree(), MigrationMode::Migrate);
        let json = OutputFormatter::new(OutputFormat::Json)
            .format_dry_run(&plan)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "migrate");
        assert_eq!(value["files"][0]["path"], "gradle/libs.versions.toml");
        assert_eq!(value["files"][0]["kind"], "catalog");
        assert_eq!(value["files"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_human_dry_run_uses_banners() {
        let plan = MigrationPlan::build(&tree(), MigrationMode::Migrate);
        let text = OutputFormatter::new(OutputFormat::Human)
            .format_dry_run(&plan)
            .unwrap();
        assert!(text.starts_with(&"=".repeat(60)));
    }

    #[test]
    fn test_json_write_result() {
        let plan = MigrationPlan::build(&tree(), MigrationMode::Overlay);
        let json = OutputFormatter::new(OutputFormat::Json)
            .format_written(&plan, &[], Path::new("/out"))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "overlay");
        assert_eq!(value["output_dir"], "/out");
    }

    #[test]
    fn test_report_formats() {
        let report = ProjectReport::from_tree(&tree());

        let human = OutputFormatter::new(OutputFormat::Human)
            .format_report(&report)
            .unwrap();
        assert!(human.starts_with("Project: com.example:demo:1.0"));

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_report(&report)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["artifact_id"], "demo");
        assert_eq!(value["modules"][0]["source_dir"], ".");
    }
}
