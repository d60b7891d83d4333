pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod ordered;

pub use config::{ConfigError, GradlifyConfig, MigrationMode, OutputFormat};
pub use error::MigrationError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use logging::{init_logging, LoggingConfig};
pub use ordered::OrderedMap;
