//! Gradle descriptor generation.
//!
//! Every generator is a pure function from parsed Maven modules to file
//! content. The version catalog is built first; build files reference its
//! aliases through a [`BuildContext`].

pub mod build_file;
pub mod catalog;
pub mod context;
pub mod gitignore;
pub mod properties_file;
pub mod settings;

pub use build_file::generate_build_file;
pub use catalog::{build_catalog, CatalogVersion, LibraryEntry, PluginEntry, VersionCatalog};
pub use context::BuildContext;
pub use gitignore::{gitignore_entries, GITIGNORE_MARKER};
pub use properties_file::generate_gradle_properties;
pub use settings::generate_settings_file;
