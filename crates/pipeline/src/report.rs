//! Applying a plan: dry-run rendering, writing, and the closing summary

use crate::plan::{FileKind, MigrationPlan};
use anyhow::{Context, Result};
use gradlify_core::{FileSystem, MigrationMode};
use gradlify_gradle::GITIGNORE_MARKER;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BANNER_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    Appended,
    /// The target already covered what would have been added.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Every planned file under a banner, in plan order.
pub fn render_dry_run(plan: &MigrationPlan) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    plan.files
        .iter()
        .map(|file| format!("{banner}\n{}\n{banner}\n{}\n", file.title(), file.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `plan` below `output_dir`. Parent directories are created as
/// needed; an existing `.gitignore` is only ever appended to.
pub fn write_plan(
    fs: &dyn FileSystem,
    plan: &MigrationPlan,
    output_dir: &Path,
) -> Result<Vec<WrittenFile>> {
    let mut written = Vec::with_capacity(plan.files.len());

    for file in &plan.files {
        let path = output_dir.join(&file.path);
        let outcome = match file.kind {
            FileKind::GitignoreAppend => merge_gitignore(fs, &path, &file.content)?,
            _ => {
                fs.write(&path, &file.content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                WriteOutcome::Written
            }
        };
        debug!(path = %path.display(), ?outcome, "Wrote file");
        written.push(WrittenFile { path, outcome });
    }

    info!(
        files = written.len(),
        output = %output_dir.display(),
        "Migration files written"
    );

    Ok(written)
}

fn merge_gitignore(fs: &dyn FileSystem, path: &Path, entries: &str) -> Result<WriteOutcome> {
    if !fs.exists(path) {
        fs.write(path, entries)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        return Ok(WriteOutcome::Written);
    }

    let existing = fs
        .read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if existing.contains(GITIGNORE_MARKER) {
        return Ok(WriteOutcome::Skipped);
    }

    fs.append(path, &format!("\n{}", entries))
        .with_context(|| format!("Failed to append to {}", path.display()))?;
    Ok(WriteOutcome::Appended)
}

pub fn next_steps(mode: MigrationMode) -> Vec<&'static str> {
    let mut steps = vec![
        "1. Review generated files and adjust as needed",
        "2. Run: gradle wrapper  # uses your installed Gradle version",
        "3. Run: ./gradlew build",
        "4. Fix any compilation or test issues",
    ];
    match mode {
        MigrationMode::Overlay => {
            steps.push("5. Both Maven and Gradle builds are now available side by side");
            steps.push("   Keep pom.xml and build.gradle.kts in sync when adding dependencies");
        }
        MigrationMode::Migrate => steps.push("5. Delete pom.xml files once migration is verified"),
    }
    steps
}

/// Human-readable summary printed after a successful write.
pub fn render_summary(plan: &MigrationPlan, written: &[WrittenFile], output_dir: &Path) -> String {
    let mut lines: Vec<String> = written
        .iter()
        .map(|file| match file.outcome {
            WriteOutcome::Written => format!("  ✓ {}", file.path.display()),
            WriteOutcome::Appended => {
                format!("  ✓ {} (appended Gradle entries)", file.path.display())
            }
            WriteOutcome::Skipped => {
                format!("  ⏭ {} (Gradle entries already present)", file.path.display())
            }
        })
        .collect();

    lines.push(String::new());
    lines.push(match plan.mode {
        MigrationMode::Overlay => format!(
            "✅ Gradle overlay complete! Generated files in: {}",
            output_dir.display()
        ),
        MigrationMode::Migrate => format!(
            "✅ Migration complete! Generated files in: {}",
            output_dir.display()
        ),
    });

    lines.push(String::new());
    lines.push("Generated files:".to_string());
    lines.extend(
        plan.files
            .iter()
            .filter(|f| f.kind != FileKind::GitignoreAppend)
            .map(|f| format!("  {}", f.path.display())),
    );

    if !plan.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push(format!("Warnings ({}):", plan.diagnostics.len()));
        lines.extend(plan.diagnostics.iter().map(|d| format!("  - {}", d)));
    }

    lines.push(String::new());
    lines.push("⚠️  Next steps:".to_string());
    lines.extend(next_steps(plan.mode).into_iter().map(|s| format!("  {}", s)));
    lines.push(String::new());

    lines.join("\n")
}
