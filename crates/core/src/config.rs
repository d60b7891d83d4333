use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DESCRIPTOR: &str = "pom.xml";

/// How generated files relate to the existing Maven build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationMode {
    /// Replace the Maven build; the pom files are expected to go away.
    #[default]
    Migrate,
    /// Add the Gradle build next to Maven and extend `.gitignore`.
    Overlay,
}

impl MigrationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationMode::Migrate => "migrate",
            MigrationMode::Overlay => "overlay",
        }
    }
}

impl FromStr for MigrationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "migrate" => Ok(MigrationMode::Migrate),
            "overlay" => Ok(MigrationMode::Overlay),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for MigrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => f.write_str("human"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid mode: {0}. Valid options: migrate, overlay")]
    InvalidMode(String),

    #[error("Invalid output format: {0}. Valid options: human, json")]
    InvalidFormat(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradlifyConfig {
    pub mode: MigrationMode,
    pub log_level: String,
    /// File name of the Maven descriptor looked up in every module directory.
    pub descriptor: String,
    pub output_format: OutputFormat,
}

impl Default for GradlifyConfig {
    fn default() -> Self {
        let mode = env::var("GRADLIFY_MODE")
            .ok()
            .and_then(|v| v.parse::<MigrationMode>().ok())
            .unwrap_or_default();

        let log_level = env::var("GRADLIFY_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let descriptor =
            env::var("GRADLIFY_DESCRIPTOR").unwrap_or_else(|_| DEFAULT_DESCRIPTOR.to_string());

        let output_format = env::var("GRADLIFY_OUTPUT_FORMAT")
            .ok()
            .and_then(|v| v.parse::<OutputFormat>().ok())
            .unwrap_or_default();

        Self {
            mode,
            log_level,
            descriptor,
            output_format,
        }
    }
}

impl GradlifyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.descriptor.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Descriptor file name cannot be empty".to_string(),
            ));
        }
        if self.descriptor.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(format!(
                "Descriptor must be a file name, not a path: {}",
                self.descriptor
            )));
        }

        Ok(())
    }
}

impl fmt::Display for GradlifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gradlify Configuration:")?;
        writeln!(f, "  Mode: {}", self.mode)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Descriptor: {}", self.descriptor)?;
        writeln!(f, "  Output Format: {}", self.output_format)?;
        Ok(())
    }
}
