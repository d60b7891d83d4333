//! `pom.xml` parsing
//!
//! Elements are matched by local name, so POMs with and without the
//! `http://maven.apache.org/POM/4.0.0` namespace parse identically. Text is
//! trimmed and empty text counts as absent.

use crate::model::{
    Activation, ConfigValue, Dependency, Exclusion, Module, OsActivation, ParentRef, Plugin,
    Profile, Properties, PropertyActivation, Repository, Scope, DEFAULT_PLUGIN_GROUP,
};
use anyhow::{bail, Context, Result};
use gradlify_core::fs::FileSystem;
use gradlify_core::OrderedMap;
use roxmltree::{Document, Node};
use std::path::Path;
use tracing::debug;

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == tag)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == tag)
}

fn element_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(|c| c.is_element())
}

fn own_text(node: Node) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn text(node: Node, tag: &str) -> Option<String> {
    child(node, tag).and_then(own_text)
}

/// `<a><b>..</b><c>..</c></a>` under `tag`, in the nested list shape most
/// POM collections use.
fn nested<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    outer: &'a str,
    inner: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    child(node, outer)
        .into_iter()
        .flat_map(move |list| children(list, inner))
}

fn parse_properties(node: Option<Node>) -> Properties {
    let mut properties = Properties::new();
    if let Some(node) = node {
        for prop in element_children(node) {
            if let Some(value) = prop.text() {
                properties.insert(prop.tag_name().name(), value.trim().to_string());
            }
        }
    }
    properties
}

fn parse_dependency(node: Node) -> Dependency {
    let optional = text(node, "optional")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let exclusions = nested(node, "exclusions", "exclusion")
        .filter_map(|ex| {
            Some(Exclusion {
                group_id: text(ex, "groupId")?,
                artifact_id: text(ex, "artifactId")?,
            })
        })
        .collect();

    Dependency {
        group_id: text(node, "groupId").unwrap_or_default(),
        artifact_id: text(node, "artifactId").unwrap_or_default(),
        version: text(node, "version"),
        scope: text(node, "scope").map(Scope::from).unwrap_or_default(),
        classifier: text(node, "classifier"),
        dep_type: text(node, "type"),
        optional,
        exclusions,
    }
}

/// Flattens `<configuration>`: children with text become a list, children
/// without become a nested map, text-only elements become leaves.
fn parse_configuration(node: Node) -> OrderedMap<ConfigValue> {
    let mut config = OrderedMap::new();
    for entry in element_children(node) {
        let key = entry.tag_name().name();
        if element_children(entry).next().is_some() {
            let items: Vec<String> = element_children(entry).filter_map(own_text).collect();
            if items.is_empty() {
                config.insert(key, ConfigValue::Map(parse_configuration(entry)));
            } else {
                config.insert(key, ConfigValue::List(items));
            }
        } else if let Some(value) = own_text(entry) {
            config.insert(key, ConfigValue::Leaf(value));
        }
    }
    config
}

fn parse_plugin(node: Node) -> Plugin {
    Plugin {
        group_id: text(node, "groupId").unwrap_or_else(|| DEFAULT_PLUGIN_GROUP.to_string()),
        artifact_id: text(node, "artifactId").unwrap_or_default(),
        version: text(node, "version"),
        configuration: child(node, "configuration")
            .map(parse_configuration)
            .unwrap_or_default(),
    }
}

fn parse_activation(node: Node) -> Activation {
    Activation {
        active_by_default: text(node, "activeByDefault").map(|v| v.eq_ignore_ascii_case("true")),
        jdk: text(node, "jdk"),
        property: child(node, "property").map(|p| PropertyActivation {
            name: text(p, "name"),
            value: text(p, "value"),
        }),
        os: child(node, "os").map(|os| OsActivation {
            name: text(os, "name"),
            family: text(os, "family"),
        }),
    }
}

fn parse_profile(node: Node) -> Profile {
    Profile {
        id: text(node, "id").unwrap_or_else(|| "default".to_string()),
        activation: child(node, "activation")
            .map(parse_activation)
            .unwrap_or_default(),
        dependencies: nested(node, "dependencies", "dependency")
            .map(parse_dependency)
            .collect(),
        plugins: child(node, "build")
            .map(|build| nested(build, "plugins", "plugin").map(parse_plugin).collect())
            .unwrap_or_default(),
        properties: parse_properties(child(node, "properties")),
    }
}

/// Parses the text of a `pom.xml`. `source_dir` is left unset.
pub fn parse_pom(content: &str) -> Result<Module> {
    let doc = Document::parse(content).context("Malformed XML")?;
    let root = doc.root_element();

    if root.tag_name().name() != "project" {
        bail!(
            "Root element is <{}>, expected <project>",
            root.tag_name().name()
        );
    }

    let parent = child(root, "parent").map(|p| ParentRef {
        group_id: text(p, "groupId"),
        artifact_id: text(p, "artifactId"),
        version: text(p, "version"),
    });

    let parent_group = parent.as_ref().and_then(|p| p.group_id.clone());
    let parent_version = parent.as_ref().and_then(|p| p.version.clone());

    let (plugins, plugin_management) = match child(root, "build") {
        Some(build) => (
            nested(build, "plugins", "plugin").map(parse_plugin).collect(),
            child(build, "pluginManagement")
                .map(|pm| nested(pm, "plugins", "plugin").map(parse_plugin).collect())
                .unwrap_or_default(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    let repositories = nested(root, "repositories", "repository")
        .filter_map(|repo| {
            let url = text(repo, "url")?;
            Some(Repository {
                id: text(repo, "id").unwrap_or_else(|| "unknown".to_string()),
                url,
            })
        })
        .collect();

    let module = Module {
        group_id: text(root, "groupId").or(parent_group).unwrap_or_default(),
        artifact_id: text(root, "artifactId").unwrap_or_default(),
        version: text(root, "version").or(parent_version),
        packaging: text(root, "packaging").unwrap_or_else(|| "jar".to_string()),
        name: text(root, "name"),
        description: text(root, "description"),
        parent,
        properties: parse_properties(child(root, "properties")),
        dependencies: nested(root, "dependencies", "dependency")
            .map(parse_dependency)
            .collect(),
        dependency_management: child(root, "dependencyManagement")
            .map(|dm| {
                nested(dm, "dependencies", "dependency")
                    .map(parse_dependency)
                    .collect()
            })
            .unwrap_or_default(),
        plugins,
        plugin_management,
        profiles: nested(root, "profiles", "profile")
            .map(parse_profile)
            .collect(),
        modules: nested(root, "modules", "module").filter_map(own_text).collect(),
        repositories,
        source_dir: None,
    };

    debug!(
        artifact = %module.artifact_id,
        dependencies = module.dependencies.len(),
        plugins = module.plugins.len(),
        modules = module.modules.len(),
        "Parsed pom"
    );

    Ok(module)
}

pub fn parse_pom_file(fs: &dyn FileSystem, path: &Path) -> Result<Module> {
    let content = fs.read_to_string(path)?;
    parse_pom(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
