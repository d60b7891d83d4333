//! Parsed Maven project graph
//!
//! Plain records produced by the parser. Nothing here is mutated after
//! parsing except `Module::source_dir`, which module discovery assigns once.

use gradlify_core::OrderedMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PLUGIN_GROUP: &str = "org.apache.maven.plugins";

pub type Properties = OrderedMap<String>;

/// Maven dependency scope. Unknown text is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
    Other(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
            Scope::Other(s) => s,
        }
    }
}

impl From<&str> for Scope {
    fn from(s: &str) -> Self {
        match s {
            "compile" => Scope::Compile,
            "provided" => Scope::Provided,
            "runtime" => Scope::Runtime,
            "test" => Scope::Test,
            "system" => Scope::System,
            "import" => Scope::Import,
            other => Scope::Other(other.to_string()),
        }
    }
}

impl From<String> for Scope {
    fn from(s: String) -> Self {
        Scope::from(s.as_str())
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    /// `None` when the version comes from a BOM or the parent.
    pub version: Option<String>,
    pub scope: Scope,
    pub classifier: Option<String>,
    pub dep_type: Option<String>,
    pub optional: bool,
    pub exclusions: Vec<Exclusion>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_type(mut self, dep_type: impl Into<String>) -> Self {
        self.dep_type = Some(dep_type.into());
        self
    }

    pub fn coordinate(&self) -> (&str, &str) {
        (&self.group_id, &self.artifact_id)
    }
}

/// Flattened value of a plugin `<configuration>` child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Leaf(String),
    List(Vec<String>),
    Map(OrderedMap<ConfigValue>),
}

impl ConfigValue {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ConfigValue::Leaf(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub configuration: OrderedMap<ConfigValue>,
}

impl Plugin {
    pub fn new(artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: DEFAULT_PLUGIN_GROUP.to_string(),
            artifact_id: artifact_id.into(),
            version: None,
            configuration: OrderedMap::new(),
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn config_leaf(&self, key: &str) -> Option<&str> {
        self.configuration.get(key).and_then(ConfigValue::as_leaf)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyActivation {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsActivation {
    pub name: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Activation {
    pub active_by_default: Option<bool>,
    pub jdk: Option<String>,
    pub property: Option<PropertyActivation>,
    pub os: Option<OsActivation>,
}

/// A `<profile>`. Recorded for comment hints, never converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub activation: Activation,
    pub dependencies: Vec<Dependency>,
    pub plugins: Vec<Plugin>,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub url: String,
}

/// One parsed `pom.xml`, root or child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub packaging: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<ParentRef>,
    /// Properties declared in this descriptor only.
    pub properties: Properties,
    pub dependencies: Vec<Dependency>,
    pub dependency_management: Vec<Dependency>,
    pub plugins: Vec<Plugin>,
    pub plugin_management: Vec<Plugin>,
    pub profiles: Vec<Profile>,
    /// Child directory names from `<modules>`.
    pub modules: Vec<String>,
    pub repositories: Vec<Repository>,
    /// `.` for the root, the `/`-joined relative path for children.
    pub source_dir: Option<String>,
}

impl Module {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            packaging: "jar".to_string(),
            name: None,
            description: None,
            parent: None,
            properties: Properties::new(),
            dependencies: Vec::new(),
            dependency_management: Vec::new(),
            plugins: Vec::new(),
            plugin_management: Vec::new(),
            profiles: Vec::new(),
            modules: Vec::new(),
            repositories: Vec::new(),
            source_dir: None,
        }
    }

    pub fn parent_artifact_id(&self) -> Option<&str> {
        self.parent.as_ref().and_then(|p| p.artifact_id.as_deref())
    }

    pub fn parent_version(&self) -> Option<&str> {
        self.parent.as_ref().and_then(|p| p.version.as_deref())
    }

    /// Direct plugins followed by managed ones.
    pub fn all_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().chain(self.plugin_management.iter())
    }

    pub fn is_aggregator(&self) -> bool {
        self.packaging == "pom" && !self.modules.is_empty()
    }

    pub fn source_dir(&self) -> &str {
        self.source_dir.as_deref().unwrap_or(".")
    }
}
