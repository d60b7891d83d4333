//! Maven `${...}` property resolution
//!
//! Only values that are a single anchored `${name}` expression are resolved.
//! Concatenations such as `${a}/${b}` or `v${x}` are returned verbatim.

use crate::model::{Dependency, Module, Properties, Scope};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MAX_DEPTH: usize = 10;

static EXPRESSION: OnceLock<Regex> = OnceLock::new();

fn expression() -> &'static Regex {
    EXPRESSION.get_or_init(|| Regex::new(r"^\$\{(.+?)\}$").expect("valid property pattern"))
}

/// Resolves `${name}` (or `${project.name}`) against `properties`.
///
/// Chains are followed up to a fixed depth; past it, and whenever a name is
/// unknown, the input comes back unchanged.
pub fn resolve_property(value: &str, properties: &Properties) -> String {
    resolve_at_depth(value, properties, 0)
}

fn resolve_at_depth(value: &str, properties: &Properties, depth: usize) -> String {
    if value.is_empty() || depth > MAX_DEPTH {
        return value.to_string();
    }

    let Some(captures) = expression().captures(value) else {
        return value.to_string();
    };
    let name = &captures[1];

    let found = properties.get(name).or_else(|| {
        name.strip_prefix("project.")
            .and_then(|stripped| properties.get(stripped))
    });

    match found {
        Some(resolved) if resolved.contains("${") => {
            resolve_at_depth(resolved, properties, depth + 1)
        }
        Some(resolved) => resolved.clone(),
        None => value.to_string(),
    }
}

/// Outcome of resolving an optional version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum VersionResolution {
    Resolved(String),
    /// Still an expression after resolution; carries what the resolver returned.
    Unresolved(String),
    Absent,
}

impl VersionResolution {
    /// Classifies the output of [`resolve_property`].
    pub fn from_resolved(value: String) -> Self {
        if value.starts_with("${") {
            VersionResolution::Unresolved(value)
        } else {
            VersionResolution::Resolved(value)
        }
    }

    pub fn resolved(&self) -> Option<&str> {
        match self {
            VersionResolution::Resolved(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, VersionResolution::Unresolved(_))
    }
}

pub fn resolve_version(version: Option<&str>, properties: &Properties) -> VersionResolution {
    match version {
        None => VersionResolution::Absent,
        Some(raw) => VersionResolution::from_resolved(resolve_property(raw, properties)),
    }
}

pub fn is_bom_import(dep: &Dependency) -> bool {
    dep.dep_type.as_deref() == Some("pom") && dep.scope == Scope::Import
}

/// Root properties first, then each child in order. Later keys win.
pub fn merge_properties(root: &Module, children: &[Module]) -> Properties {
    let mut merged = root.properties.clone();
    for child in children {
        merged.extend_from(&child.properties);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[parameterized(
        simple = { "${spring.version}", "6.1.0" },
        project_prefix = { "${project.revision}", "2.0.0" },
        project_direct = { "${project.version}", "9.9" },
        literal = { "1.2.3", "1.2.3" },
        empty = { "", "" },
        unknown = { "${nope}", "${nope}" },
        concatenated = { "${a}/${b}", "${a}/${b}" },
        prefixed = { "v${spring.version}", "v${spring.version}" },
    )]
    fn test_resolve_property(input: &str, expected: &str) {
        let properties = props(&[
            ("spring.version", "6.1.0"),
            ("revision", "2.0.0"),
            ("project.version", "9.9"),
            ("a", "x"),
            ("b", "y"),
        ]);
        assert_eq!(resolve_property(input, &properties), expected);
    }

    #[test]
    fn test_property_chain() {
        let properties = props(&[("a", "${b}"), ("b", "${c}"), ("c", "3.1")]);
        assert_eq!(resolve_property("${a}", &properties), "3.1");
    }

    #[test]
    fn test_property_cycle_terminates() {
        let properties = props(&[("a", "${b}"), ("b", "${a}")]);
        let result = resolve_property("${a}", &properties);
        assert!(result.starts_with("${"));
    }

    #[test]
    fn test_self_reference_terminates() {
        let properties = props(&[("loop", "${loop}")]);
        assert_eq!(resolve_property("${loop}", &properties), "${loop}");
    }

    #[test]
    fn test_chain_to_unknown_returns_last_expression() {
        let properties = props(&[("a", "${missing}")]);
        assert_eq!(resolve_property("${a}", &properties), "${missing}");
    }

    #[test]
    fn test_resolve_version_variants() {
        let properties = props(&[("lib.version", "1.4")]);

        assert_eq!(resolve_version(None, &properties), VersionResolution::Absent);
        assert_eq!(
            resolve_version(Some("${lib.version}"), &properties),
            VersionResolution::Resolved("1.4".to_string())
        );
        assert_eq!(
            resolve_version(Some("2.0"), &properties),
            VersionResolution::Resolved("2.0".to_string())
        );
        assert_eq!(
            resolve_version(Some("${unknown.version}"), &properties),
            VersionResolution::Unresolved("${unknown.version}".to_string())
        );
    }

    #[test]
    fn test_is_bom_import() {
        let bom = Dependency::new("org.springframework.cloud", "spring-cloud-dependencies")
            .with_type("pom")
            .with_scope("import");
        assert!(is_bom_import(&bom));

        let pom_only = Dependency::new("g", "a").with_type("pom");
        assert!(!is_bom_import(&pom_only));

        let import_jar = Dependency::new("g", "a").with_scope("import");
        assert!(!is_bom_import(&import_jar));
    }

    #[test]
    fn test_merge_properties_last_write_wins() {
        let mut root = Module::new("com.example", "parent");
        root.properties = props(&[("java.version", "17"), ("shared", "root")]);
        let mut api = Module::new("com.example", "api");
        api.properties = props(&[("shared", "api")]);
        let mut web = Module::new("com.example", "web");
        web.properties = props(&[("shared", "web"), ("web.only", "1")]);

        let merged = merge_properties(&root, &[api, web]);

        assert_eq!(merged.get("shared").map(String::as_str), Some("web"));
        assert_eq!(merged.get("java.version").map(String::as_str), Some("17"));
        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec!["java.version", "shared", "web.only"]
        );
    }
}
