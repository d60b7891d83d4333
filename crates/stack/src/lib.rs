//! Technology detection and Maven to Gradle coordinate mapping.

pub mod detection;
pub mod mapping;

pub use detection::{
    detect_java_version, detect_kotlin_version, is_annotation_processor, is_devtools,
    is_spring_boot_project, TechStack,
};
pub use mapping::{
    gradle_plugin_id, is_skipped_plugin, map_scope_to_configuration, to_accessor,
    to_library_alias, to_plugin_alias, to_version_key,
};
