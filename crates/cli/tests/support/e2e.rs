use super::discovery::Fixture;
use super::get_gradlify_binary;
use serde::Deserialize;
use std::process::Command;

#[derive(Debug, Deserialize)]
pub struct PlannedFile {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct Plan {
    pub mode: String,
    pub files: Vec<PlannedFile>,
    pub diagnostics: Vec<String>,
}

pub struct RunOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `gradlify migrate --dry-run --format json` against the fixture, so
/// the fixture directory is never written to.
#[allow(dead_code)]
pub fn run_dry_run(fixture: &Fixture) -> RunOutput {
    let mut cmd = Command::new(get_gradlify_binary());
    cmd.arg("--quiet")
        .arg("migrate")
        .arg(&fixture.path)
        .arg("--dry-run")
        .arg("--format")
        .arg("json")
        .env_remove("GRADLIFY_MODE")
        .env_remove("GRADLIFY_DESCRIPTOR")
        .env_remove("GRADLIFY_OUTPUT_FORMAT");

    if let Some(mode) = &fixture.expectations.mode {
        cmd.arg("--mode").arg(mode);
    }

    let output = cmd.output().expect("Failed to execute gradlify");

    RunOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[allow(dead_code)]
pub fn assert_fixture(fixture: &Fixture, output: &RunOutput) -> Result<(), String> {
    let expected = &fixture.expectations;

    if output.exit_code != expected.exit_code {
        return Err(format!(
            "Expected exit code {} but got {}\nstderr: {}",
            expected.exit_code, output.exit_code, output.stderr
        ));
    }

    for needle in &expected.stderr {
        if !output.stderr.contains(needle) {
            return Err(format!(
                "stderr does not contain '{}':\n{}",
                needle, output.stderr
            ));
        }
    }

    if expected.exit_code != 0 {
        return Ok(());
    }

    let plan: Plan = serde_json::from_str(&output.stdout)
        .map_err(|e| format!("Failed to parse output as JSON: {}\n{}", e, output.stdout))?;

    if let Some(mode) = &expected.mode {
        if &plan.mode != mode {
            return Err(format!("Expected mode '{}' but got '{}'", mode, plan.mode));
        }
    }

    let paths: Vec<&str> = plan.files.iter().map(|f| f.path.as_str()).collect();
    if paths != expected.files {
        return Err(format!(
            "Planned files differ\n  expected: {:?}\n  actual:   {:?}",
            expected.files, paths
        ));
    }

    let content_of = |path: &str| -> Result<&str, String> {
        plan.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
            .ok_or_else(|| format!("No planned file '{}'", path))
    };

    for (path, needles) in &expected.contains {
        let content = content_of(path)?;
        for needle in needles {
            if !content.contains(needle.as_str()) {
                return Err(format!(
                    "{} does not contain:\n{}\n--- actual ---\n{}",
                    path, needle, content
                ));
            }
        }
    }

    for (path, needles) in &expected.absent {
        let content = content_of(path)?;
        for needle in needles {
            if content.contains(needle.as_str()) {
                return Err(format!(
                    "{} unexpectedly contains '{}'\n--- actual ---\n{}",
                    path, needle, content
                ));
            }
        }
    }

    if expected.diagnostics.len() != plan.diagnostics.len() {
        return Err(format!(
            "Expected {} diagnostics but got {}: {:?}",
            expected.diagnostics.len(),
            plan.diagnostics.len(),
            plan.diagnostics
        ));
    }
    for needle in &expected.diagnostics {
        if !plan.diagnostics.iter().any(|d| d.contains(needle.as_str())) {
            return Err(format!(
                "No diagnostic contains '{}': {:?}",
                needle, plan.diagnostics
            ));
        }
    }

    Ok(())
}
