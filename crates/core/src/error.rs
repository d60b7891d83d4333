use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a migration before any file is produced.
///
/// Everything else (unresolved versions, unmapped plugins, broken child
/// modules) is recoverable and reported as a warning instead.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("No pom.xml found at {}", path.display())]
    MissingRootDescriptor { path: PathBuf },

    #[error("Failed to parse {}: {message}", path.display())]
    InvalidDescriptor { path: PathBuf, message: String },

    #[error("Project directory does not exist: {}", path.display())]
    MissingProject { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message() {
        let err = MigrationError::MissingRootDescriptor {
            path: PathBuf::from("/work/app/pom.xml"),
        };
        assert_eq!(err.to_string(), "No pom.xml found at /work/app/pom.xml");
    }

    #[test]
    fn test_invalid_descriptor_message() {
        let err = MigrationError::InvalidDescriptor {
            path: PathBuf::from("pom.xml"),
            message: "unexpected end of stream".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse pom.xml: unexpected end of stream"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = MigrationError::Io {
            path: PathBuf::from("build.gradle.kts"),
            source: anyhow::anyhow!("permission denied"),
        };
        assert!(err.to_string().contains("permission denied"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
