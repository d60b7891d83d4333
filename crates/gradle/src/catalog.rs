//! `gradle/libs.versions.toml` construction
//!
//! The catalog is built in a fixed order: detected stack versions, BOM
//! imports, direct dependencies of every module, then plugins. Each section
//! keeps insertion order so the rendered file is stable across runs.

use gradlify_core::OrderedMap;
use gradlify_maven::{
    is_bom_import, merge_properties, resolve_property, resolve_version, Dependency, Module,
    Properties, VersionResolution,
};
use gradlify_stack::{
    gradle_plugin_id, is_skipped_plugin, to_library_alias, to_plugin_alias, to_version_key,
    TechStack,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

pub const SPRING_BOOT_VERSION_KEY: &str = "spring-boot";
pub const JAVA_VERSION_KEY: &str = "java";
pub const KOTLIN_VERSION_KEY: &str = "kotlin";

const SPRING_BOOT_PLUGIN_ID: &str = "org.springframework.boot";
const DEPENDENCY_MANAGEMENT_PLUGIN_ID: &str = "io.spring.dependency-management";
const KOTLIN_JVM_PLUGIN_ID: &str = "org.jetbrains.kotlin.jvm";
const KOTLIN_SPRING_PLUGIN_ID: &str = "org.jetbrains.kotlin.plugin.spring";

/// How a library entry pins its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CatalogVersion {
    /// Key into `[versions]`.
    Ref(String),
    /// Managed elsewhere (BOM or Spring Boot parent).
    Managed,
    /// Could not be resolved; the entry is rendered commented out and
    /// carries the expression to resolve by hand.
    Unresolved(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub group: String,
    pub name: String,
    pub version: CatalogVersion,
}

impl LibraryEntry {
    pub fn is_commented(&self) -> bool {
        matches!(self.version, CatalogVersion::Unresolved(_))
    }

    fn render(&self, alias: &str) -> String {
        match &self.version {
            CatalogVersion::Ref(key) => format!(
                "{} = {{ group = \"{}\", name = \"{}\", version.ref = \"{}\" }}",
                alias, self.group, self.name, key
            ),
            CatalogVersion::Managed => format!(
                "{} = {{ group = \"{}\", name = \"{}\" }}",
                alias, self.group, self.name
            ),
            CatalogVersion::Unresolved(expression) => format!(
                "# {} = {{ group = \"{}\", name = \"{}\" }}  # TODO: resolve version from {}",
                alias, self.group, self.name, expression
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    pub id: String,
    pub version_ref: Option<String>,
}

impl PluginEntry {
    fn new(id: impl Into<String>, version_ref: Option<String>) -> Self {
        Self {
            id: id.into(),
            version_ref,
        }
    }

    fn render(&self, alias: &str) -> String {
        match &self.version_ref {
            Some(key) => format!("{} = {{ id = \"{}\", version.ref = \"{}\" }}", alias, self.id, key),
            None => format!("{} = {{ id = \"{}\" }}", alias, self.id),
        }
    }
}

/// The shared version catalog for a module tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VersionCatalog {
    versions: OrderedMap<String>,
    libraries: OrderedMap<LibraryEntry>,
    plugins: OrderedMap<PluginEntry>,
    #[serde(skip)]
    library_aliases: HashMap<(String, String), String>,
    diagnostics: Vec<String>,
}

impl VersionCatalog {
    pub fn versions(&self) -> &OrderedMap<String> {
        &self.versions
    }

    pub fn libraries(&self) -> &OrderedMap<LibraryEntry> {
        &self.libraries
    }

    pub fn plugins(&self) -> &OrderedMap<PluginEntry> {
        &self.plugins
    }

    pub fn version(&self, key: &str) -> Option<&str> {
        self.versions.get(key).map(String::as_str)
    }

    /// Alias recorded for a library coordinate, if the catalog has one.
    pub fn library_alias(&self, group: &str, artifact: &str) -> Option<&str> {
        self.library_aliases
            .get(&(group.to_string(), artifact.to_string()))
            .map(String::as_str)
    }

    pub fn library(&self, group: &str, artifact: &str) -> Option<&LibraryEntry> {
        self.library_alias(group, artifact)
            .and_then(|alias| self.libraries.get(alias))
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["[versions]".to_string()];
        for (key, value) in self.versions.iter() {
            lines.push(format!("{} = \"{}\"", key, value));
        }

        lines.push(String::new());
        lines.push("[libraries]".to_string());
        for (alias, entry) in self.libraries.iter() {
            lines.push(entry.render(alias));
        }

        if !self.plugins.is_empty() {
            lines.push(String::new());
            lines.push("[plugins]".to_string());
            for (alias, entry) in self.plugins.iter() {
                lines.push(entry.render(alias));
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }

    fn add_library(&mut self, alias: String, dep: &Dependency, version: CatalogVersion) {
        self.library_aliases.insert(
            (dep.group_id.clone(), dep.artifact_id.clone()),
            alias.clone(),
        );
        self.libraries.insert(
            alias,
            LibraryEntry {
                group: dep.group_id.clone(),
                name: dep.artifact_id.clone(),
                version,
            },
        );
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.diagnostics.push(message);
    }

    /// `alias`, or a variant of it when a different coordinate already owns
    /// that alias: first `group-artifact`, then numeric suffixes.
    fn unique_alias(&self, alias: String, dep: &Dependency) -> String {
        let owned_by_other = |candidate: &str| {
            self.libraries
                .get(candidate)
                .is_some_and(|e| e.group != dep.group_id || e.name != dep.artifact_id)
        };
        if !owned_by_other(&alias) {
            return alias;
        }

        let qualified = to_version_key(&format!("{}-{}", dep.group_id, dep.artifact_id));
        let mut candidate = qualified.clone();
        let mut n = 2;
        while owned_by_other(&candidate) {
            candidate = format!("{}-{}", qualified, n);
            n += 1;
        }
        candidate
    }

    /// Records `value` under `base`, or under `base-2`, `base-3`, ... when
    /// `base` already pins a different version. Returns the key used.
    fn pin_version(&mut self, base: String, value: String) -> String {
        let mut key = base.clone();
        let mut n = 2;
        while self.versions.get(&key).is_some_and(|existing| *existing != value) {
            key = format!("{}-{}", base, n);
            n += 1;
        }
        self.versions.insert(key.clone(), value);
        key
    }

    /// First version key (other than `java`) already pinned to `value`.
    fn key_for_value(&self, value: &str) -> Option<String> {
        self.versions
            .iter()
            .find(|(key, v)| *key != JAVA_VERSION_KEY && v.as_str() == value)
            .map(|(key, _)| key.to_string())
    }
}

/// Builds the catalog for `root` and its discovered `children`.
pub fn build_catalog(root: &Module, children: &[Module]) -> VersionCatalog {
    let properties = merge_properties(root, children);
    let modules: Vec<&Module> = std::iter::once(root).chain(children.iter()).collect();
    let module_artifacts: HashSet<&str> =
        modules.iter().map(|m| m.artifact_id.as_str()).collect();
    let stack = TechStack::detect(root, children);

    let mut catalog = VersionCatalog::default();
    let mut seen_libraries: HashSet<(String, String)> = HashSet::new();

    if stack.spring_boot {
        match stack.spring_boot_version.clone().map(VersionResolution::from_resolved) {
            Some(VersionResolution::Resolved(version)) => {
                catalog.versions.insert(SPRING_BOOT_VERSION_KEY, version);
            }
            Some(VersionResolution::Unresolved(expression)) => catalog.warn(format!(
                "Could not resolve Spring Boot version '{}', omitting plugin version in catalog",
                expression
            )),
            _ => catalog.warn(
                "Spring Boot detected without a parent version, omitting plugin version in catalog"
                    .to_string(),
            ),
        }
    }
    if let Some(java) = &stack.java_version {
        catalog.versions.insert(JAVA_VERSION_KEY, java.clone());
    }
    if let Some(kotlin) = &stack.kotlin_version {
        catalog.versions.insert(KOTLIN_VERSION_KEY, kotlin.clone());
    }

    for dep in modules
        .iter()
        .flat_map(|m| m.dependency_management.iter())
        .filter(|d| is_bom_import(d))
    {
        if !seen_libraries.insert(coordinate(dep)) {
            continue;
        }
        let alias = catalog.unique_alias(to_library_alias(&dep.group_id, &dep.artifact_id), dep);
        let version = match resolve_version(dep.version.as_deref(), &properties) {
            VersionResolution::Unresolved(_) => {
                let raw = dep.version.clone().unwrap_or_default();
                catalog.warn(unresolved_message(&raw, dep));
                CatalogVersion::Unresolved(raw)
            }
            VersionResolution::Resolved(version) => {
                CatalogVersion::Ref(catalog.pin_version(to_version_key(&alias), version))
            }
            VersionResolution::Absent => CatalogVersion::Managed,
        };
        catalog.add_library(alias, dep, version);
    }

    let managed = managed_versions(&modules, &properties);

    for dep in modules.iter().flat_map(|m| m.dependencies.iter()) {
        let coord = coordinate(dep);
        if seen_libraries.contains(&coord) {
            continue;
        }
        if dep.group_id == root.group_id && module_artifacts.contains(dep.artifact_id.as_str()) {
            continue;
        }
        seen_libraries.insert(coord.clone());

        let alias = catalog.unique_alias(to_library_alias(&dep.group_id, &dep.artifact_id), dep);
        let (resolution, expression) = match &dep.version {
            Some(raw) => (resolve_version(Some(raw), &properties), raw.clone()),
            None => match managed.get(&coord) {
                Some(value) => (VersionResolution::from_resolved(value.clone()), value.clone()),
                None => (VersionResolution::Absent, String::new()),
            },
        };

        let version = match resolution {
            VersionResolution::Unresolved(_) => {
                catalog.warn(unresolved_message(&expression, dep));
                CatalogVersion::Unresolved(expression)
            }
            VersionResolution::Resolved(version) => {
                let key = match catalog.key_for_value(&version) {
                    Some(existing) => existing,
                    None => catalog.pin_version(to_version_key(&alias), version),
                };
                CatalogVersion::Ref(key)
            }
            VersionResolution::Absent => CatalogVersion::Managed,
        };
        catalog.add_library(alias, dep, version);
    }

    collect_plugins(&mut catalog, &modules, &properties, &stack);

    debug!(
        versions = catalog.versions.len(),
        libraries = catalog.libraries.len(),
        plugins = catalog.plugins.len(),
        "Built version catalog"
    );

    catalog
}

fn collect_plugins(
    catalog: &mut VersionCatalog,
    modules: &[&Module],
    properties: &Properties,
    stack: &TechStack,
) {
    let mut seen: HashSet<String> = HashSet::new();

    if stack.spring_boot {
        let version_ref = catalog
            .versions
            .contains_key(SPRING_BOOT_VERSION_KEY)
            .then(|| SPRING_BOOT_VERSION_KEY.to_string());
        catalog
            .plugins
            .insert("spring-boot", PluginEntry::new(SPRING_BOOT_PLUGIN_ID, version_ref));
        catalog.plugins.insert(
            "spring-dependency-management",
            PluginEntry::new(DEPENDENCY_MANAGEMENT_PLUGIN_ID, None),
        );
        seen.insert("spring-boot-maven-plugin".to_string());
    }

    if stack.is_kotlin() {
        let kotlin = Some(KOTLIN_VERSION_KEY.to_string());
        catalog
            .plugins
            .insert("kotlin-jvm", PluginEntry::new(KOTLIN_JVM_PLUGIN_ID, kotlin.clone()));
        catalog
            .plugins
            .insert("kotlin-spring", PluginEntry::new(KOTLIN_SPRING_PLUGIN_ID, kotlin));
        seen.insert("kotlin-maven-plugin".to_string());
    }

    for plugin in modules.iter().flat_map(|m| m.all_plugins()) {
        if seen.contains(&plugin.artifact_id) || is_skipped_plugin(&plugin.artifact_id) {
            continue;
        }
        seen.insert(plugin.artifact_id.clone());

        let Some(id) = gradle_plugin_id(&plugin.artifact_id) else {
            debug!(plugin = %plugin.artifact_id, "No Gradle equivalent, skipping plugin");
            continue;
        };

        let alias = to_plugin_alias(&plugin.group_id, &plugin.artifact_id);
        let version_ref = match resolve_version(plugin.version.as_deref(), properties) {
            VersionResolution::Unresolved(_) => {
                catalog.warn(format!(
                    "Could not resolve plugin version '{}' for {}, omitting version in catalog",
                    plugin.version.as_deref().unwrap_or_default(),
                    plugin.artifact_id
                ));
                None
            }
            VersionResolution::Resolved(version) => {
                Some(catalog.pin_version(to_version_key(&alias), version))
            }
            VersionResolution::Absent => None,
        };
        catalog.plugins.insert(alias, PluginEntry::new(id, version_ref));
    }
}

/// Non-BOM managed versions, later declarations winning.
fn managed_versions(
    modules: &[&Module],
    properties: &Properties,
) -> HashMap<(String, String), String> {
    modules
        .iter()
        .flat_map(|m| m.dependency_management.iter())
        .filter(|d| !is_bom_import(d))
        .filter_map(|d| {
            d.version
                .as_deref()
                .map(|v| (coordinate(d), resolve_property(v, properties)))
        })
        .collect()
}

fn coordinate(dep: &Dependency) -> (String, String) {
    (dep.group_id.clone(), dep.artifact_id.clone())
}

fn unresolved_message(expression: &str, dep: &Dependency) -> String {
    format!(
        "Could not resolve version '{}' for {}:{}, commenting out in catalog",
        expression, dep.group_id, dep.artifact_id
    )
}
