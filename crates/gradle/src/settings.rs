//! `settings.gradle.kts` generation

use crate::context::include_path;
use gradlify_maven::Module;
use std::collections::HashSet;

/// Repositories other than Maven Central, normalized and first-seen order.
fn custom_repositories<'a>(modules: impl IntoIterator<Item = &'a Module>) -> Vec<String> {
    let mut seen = HashSet::new();
    modules
        .into_iter()
        .flat_map(|m| m.repositories.iter())
        .filter(|repo| !repo.id.to_lowercase().contains("central"))
        .map(|repo| repo.url.trim_end_matches('/').to_string())
        .filter(|url| !url.contains("repo1.maven.org"))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

pub fn generate_settings_file(root: &Module, children: &[Module]) -> String {
    let repositories = custom_repositories(std::iter::once(root).chain(children));
    let mut lines: Vec<String> = Vec::new();

    if !repositories.is_empty() || !root.modules.is_empty() {
        lines.push("pluginManagement {".to_string());
        lines.push("    repositories {".to_string());
        lines.push("        mavenCentral()".to_string());
        lines.push("        gradlePluginPortal()".to_string());
        for url in &repositories {
            lines.push(format!("        maven {{ url = uri(\"{}\") }}", url));
        }
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    if !repositories.is_empty() {
        lines.push("dependencyResolutionManagement {".to_string());
        lines.push("    repositories {".to_string());
        lines.push("        mavenCentral()".to_string());
        for url in &repositories {
            lines.push(format!("        maven {{ url = uri(\"{}\") }}", url));
        }
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    lines.push(format!("rootProject.name = \"{}\"", root.artifact_id));
    lines.push(String::new());

    if !children.is_empty() {
        for child in children {
            lines.push(format!("include(\"{}\")", include_path(child)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
