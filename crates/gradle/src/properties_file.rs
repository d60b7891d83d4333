//! `gradle.properties` generation

use gradlify_maven::Module;

const HEADER: &[&str] = &[
    "# Generated by Maven-to-Gradle migration",
    "org.gradle.daemon=true",
    "org.gradle.parallel=true",
    "org.gradle.caching=true",
    "# org.gradle.configuration-cache=true  # Enable after verifying all plugins support it",
];

const TOOLCHAIN_PREFIXES: &[&str] = &["maven.", "java.", "kotlin."];

/// Build performance settings plus the root's custom properties as comments.
pub fn generate_gradle_properties(root: &Module) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();

    for (key, value) in root.properties.iter() {
        if key.starts_with("project.build.sourceEncoding") {
            lines.push(format!("# Source encoding: {}", value));
        } else if key.starts_with("project.reporting.outputEncoding") {
            continue;
        } else if !TOOLCHAIN_PREFIXES.iter().any(|p| key.starts_with(p)) {
            lines.push(format!("# {}={}", key.replace('.', "_"), value));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
