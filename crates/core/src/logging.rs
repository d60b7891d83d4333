//! Structured logging setup
//!
//! All crates in the workspace log through the `tracing` macros. The binary
//! installs a single subscriber here, writing to stderr so that dry-run
//! output on stdout stays clean and can be piped.
//!
//! Level selection, highest priority first:
//!
//! 1. `RUST_LOG` (full `EnvFilter` syntax)
//! 2. `--log-level`
//! 3. `-v` / `-q`
//! 4. `GRADLIFY_LOG_LEVEL`
//! 5. `info`

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Crate targets that receive the configured level when `RUST_LOG` is unset.
const WORKSPACE_TARGETS: &[&str] = &[
    "gradlify",
    "gradlify_core",
    "gradlify_maven",
    "gradlify_stack",
    "gradlify_gradle",
    "gradlify_pipeline",
    "gradlify_cli",
];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub use_json: bool,
    pub include_target: bool,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Builds the configuration from the global CLI flags.
    pub fn from_flags(log_level: Option<&str>, verbose: bool, quiet: bool) -> Self {
        let level = if let Some(level_str) = log_level {
            parse_level(level_str)
        } else if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("GRADLIFY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let use_json = env::var("GRADLIFY_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            include_target: verbose,
            ..Default::default()
        }
    }
}

/// Parses a level name case-insensitively; unknown names fall back to INFO.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    WORKSPACE_TARGETS
        .iter()
        .fold(EnvFilter::new("warn"), |filter, target| {
            match format!("{}={}", target, level).parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Warn"), Level::WARN);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("loud"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    #[serial]
    fn test_from_flags_priority() {
        env::remove_var("GRADLIFY_LOG_LEVEL");

        let config = LoggingConfig::from_flags(Some("trace"), false, true);
        assert_eq!(config.level, Level::TRACE);

        let config = LoggingConfig::from_flags(None, true, false);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.include_target);

        let config = LoggingConfig::from_flags(None, false, true);
        assert_eq!(config.level, Level::ERROR);

        let config = LoggingConfig::from_flags(None, false, false);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_from_flags_reads_env() {
        env::set_var("GRADLIFY_LOG_LEVEL", "warn");
        let config = LoggingConfig::from_flags(None, false, false);
        env::remove_var("GRADLIFY_LOG_LEVEL");

        assert_eq!(config.level, Level::WARN);
    }
}
