use clap::{Parser, Subcommand, ValueEnum};
use gradlify_core::{MigrationMode, OutputFormat};
use std::path::PathBuf;

/// Converts Maven builds to Gradle Kotlin DSL with a shared version catalog
#[derive(Parser, Debug)]
#[command(
    name = "gradlify",
    about = "Converts Maven builds to Gradle Kotlin DSL with a shared version catalog",
    version,
    author,
    long_about = "gradlify reads a Maven project (single or multi-module) and generates \
                  settings.gradle.kts, build.gradle.kts files, gradle.properties and a \
                  gradle/libs.versions.toml version catalog shared by every module."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate Gradle build files for a Maven project",
        long_about = "Parses pom.xml files starting at PROJECT and writes the Gradle build.\n\n\
                      Examples:\n  \
                      gradlify migrate ./my-service\n  \
                      gradlify migrate ./my-service --dry-run\n  \
                      gradlify migrate ./my-service --mode overlay\n  \
                      gradlify migrate ./my-service -o ./converted"
    )]
    Migrate(MigrateArgs),

    #[command(
        about = "Show modules and detected technology without generating files",
        long_about = "Parses the module tree and reports what a migration would see.\n\n\
                      Examples:\n  \
                      gradlify inspect ./my-service\n  \
                      gradlify inspect ./my-service --format json"
    )]
    Inspect(InspectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct MigrateArgs {
    #[arg(value_name = "PROJECT", help = "Path to the Maven project root")]
    pub project: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory (defaults to the project directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Print generated files instead of writing them")]
    pub dry_run: bool,

    #[arg(
        short = 'm',
        long,
        value_enum,
        help = "'migrate' replaces Maven, 'overlay' keeps both builds side by side"
    )]
    pub mode: Option<ModeArg>,

    #[arg(short = 'f', long, value_enum, help = "Output format")]
    pub format: Option<OutputFormatArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(value_name = "PROJECT", help = "Path to the Maven project root")]
    pub project: PathBuf,

    #[arg(short = 'f', long, value_enum, help = "Output format")]
    pub format: Option<OutputFormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Migrate,
    Overlay,
}

impl From<ModeArg> for MigrationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Migrate => MigrationMode::Migrate,
            ModeArg::Overlay => MigrationMode::Overlay,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use yare::parameterized;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_migrate_args() {
        let args = CliArgs::parse_from(["gradlify", "migrate", "/tmp/app"]);
        match args.command {
            Commands::Migrate(migrate) => {
                assert_eq!(migrate.project, PathBuf::from("/tmp/app"));
                assert!(migrate.output.is_none());
                assert!(!migrate.dry_run);
                assert!(migrate.mode.is_none());
                assert!(migrate.format.is_none());
            }
            _ => panic!("Expected Migrate command"),
        }
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_migrate_short_flags() {
        let args = CliArgs::parse_from([
            "gradlify", "migrate", "app", "-o", "out", "-n", "-m", "overlay", "-f", "json",
        ]);
        match args.command {
            Commands::Migrate(migrate) => {
                assert_eq!(migrate.output, Some(PathBuf::from("out")));
                assert!(migrate.dry_run);
                assert_eq!(migrate.mode, Some(ModeArg::Overlay));
                assert_eq!(migrate.format, Some(OutputFormatArg::Json));
            }
            _ => panic!("Expected Migrate command"),
        }
    }

    #[test]
    fn test_inspect_args() {
        let args = CliArgs::parse_from(["gradlify", "inspect", "app", "--format", "json"]);
        match args.command {
            Commands::Inspect(inspect) => {
                assert_eq!(inspect.project, PathBuf::from("app"));
                assert_eq!(inspect.format, Some(OutputFormatArg::Json));
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[parameterized(
        log_level = { &["gradlify", "--log-level", "debug", "inspect", "app"] },
        verbose_after = { &["gradlify", "inspect", "app", "-v"] },
        quiet_before = { &["gradlify", "-q", "migrate", "app"] },
    )]
    fn test_global_flags_anywhere(argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_ok());
    }

    #[parameterized(
        verbose_and_quiet = { &["gradlify", "-v", "-q", "inspect", "app"] },
        unknown_mode = { &["gradlify", "migrate", "app", "--mode", "replace"] },
        unknown_format = { &["gradlify", "inspect", "app", "-f", "yaml"] },
        missing_project = { &["gradlify", "migrate"] },
    )]
    fn test_invalid_arguments(argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(MigrationMode::from(ModeArg::Overlay), MigrationMode::Overlay);
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
    }
}
