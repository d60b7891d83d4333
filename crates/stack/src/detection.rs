//! Technology detection over a parsed module tree
//!
//! Answers the questions the generators branch on: which Java release, is
//! Kotlin in play and at which version, is this a Spring Boot build.

use gradlify_maven::{
    merge_properties, resolve_property, Dependency, Module, Plugin, Properties,
};
use serde::Serialize;
use tracing::debug;

const JAVA_VERSION_PROPERTIES: &[&str] = &[
    "java.version",
    "maven.compiler.release",
    "maven.compiler.source",
    "maven.compiler.target",
    "jdk.version",
    "java.source.version",
];

const COMPILER_VERSION_KEYS: &[&str] = &["release", "source", "target"];

const KOTLIN_VERSION_PROPERTIES: &[&str] = &["kotlin.version", "kotlin-version"];

const ANNOTATION_PROCESSORS: &[&str] = &[
    "lombok",
    "mapstruct-processor",
    "hibernate-jpamodelgen",
    "spring-boot-configuration-processor",
];

/// Legacy `1.x` releases become `x`; anything else is returned unchanged.
fn normalize_java_version(version: &str) -> String {
    match version.strip_prefix("1.") {
        Some(rest) if version.len() <= 4 => rest.to_string(),
        _ => version.to_string(),
    }
}

/// Java release from well-known properties, falling back to the
/// `maven-compiler-plugin` configuration.
pub fn detect_java_version<'a>(
    properties: &Properties,
    plugins: impl IntoIterator<Item = &'a Plugin>,
) -> Option<String> {
    if let Some(version) = JAVA_VERSION_PROPERTIES
        .iter()
        .find_map(|name| properties.get(name))
    {
        return Some(normalize_java_version(version));
    }

    plugins
        .into_iter()
        .filter(|p| p.artifact_id == "maven-compiler-plugin")
        .find_map(|p| {
            COMPILER_VERSION_KEYS
                .iter()
                .find_map(|key| p.config_leaf(key))
        })
        .map(|raw| normalize_java_version(&resolve_property(raw, properties)))
}

/// Kotlin version from `kotlin-maven-plugin`, else from the usual properties.
/// `None` means the project does not use Kotlin.
pub fn detect_kotlin_version<'a>(
    properties: &Properties,
    plugins: impl IntoIterator<Item = &'a Plugin>,
) -> Option<String> {
    let from_plugin = plugins
        .into_iter()
        .filter(|p| p.artifact_id == "kotlin-maven-plugin")
        .find_map(|p| p.version.as_deref())
        .map(|v| resolve_property(v, properties));

    from_plugin.or_else(|| {
        KOTLIN_VERSION_PROPERTIES
            .iter()
            .find_map(|name| properties.get(name))
            .cloned()
    })
}

pub fn is_spring_boot_project(module: &Module) -> bool {
    module.parent_artifact_id() == Some("spring-boot-starter-parent")
        || module
            .all_plugins()
            .any(|p| p.artifact_id == "spring-boot-maven-plugin")
}

pub fn is_devtools(dep: &Dependency) -> bool {
    dep.artifact_id == "spring-boot-devtools"
}

pub fn is_annotation_processor(dep: &Dependency) -> bool {
    ANNOTATION_PROCESSORS.contains(&dep.artifact_id.as_str())
}

/// Detector outputs for a whole module tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TechStack {
    pub java_version: Option<String>,
    pub kotlin_version: Option<String>,
    pub spring_boot: bool,
    /// Resolved Spring Boot version from the root's parent, when known.
    pub spring_boot_version: Option<String>,
}

impl TechStack {
    /// Detects from the merged properties of the tree and the root's own
    /// plugins and plugin management.
    pub fn detect(root: &Module, children: &[Module]) -> Self {
        let properties = merge_properties(root, children);
        let spring_boot = is_spring_boot_project(root);

        let stack = Self {
            java_version: detect_java_version(&properties, root.all_plugins()),
            kotlin_version: detect_kotlin_version(&properties, root.all_plugins()),
            spring_boot,
            spring_boot_version: root
                .parent_version()
                .filter(|_| spring_boot)
                .map(|v| resolve_property(v, &properties)),
        };

        debug!(
            java = ?stack.java_version,
            kotlin = ?stack.kotlin_version,
            spring_boot = stack.spring_boot,
            "Detected technology stack"
        );

        stack
    }

    pub fn is_kotlin(&self) -> bool {
        self.kotlin_version.is_some()
    }
}
