pub mod model;
pub mod parser;
pub mod properties;

pub use model::{
    Activation, ConfigValue, Dependency, Exclusion, Module, OsActivation, ParentRef, Plugin,
    Profile, Properties, PropertyActivation, Repository, Scope,
};
pub use parser::{parse_pom, parse_pom_file};
pub use properties::{
    is_bom_import, merge_properties, resolve_property, resolve_version, VersionResolution,
};
