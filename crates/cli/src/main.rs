use gradlify_cli::cli::commands::{CliArgs, Commands, InspectArgs, MigrateArgs};
use gradlify_cli::cli::output::OutputFormatter;
use gradlify_cli::{NAME, VERSION};
use gradlify_core::{init_logging, GradlifyConfig, LoggingConfig, RealFileSystem};
use gradlify_pipeline::{
    discover_modules_named, write_plan, MigrationContext, MigrationOrchestrator, ProjectReport,
};

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::{debug, info};

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let result = match &args.command {
        Commands::Migrate(migrate_args) => handle_migrate(migrate_args, &args),
        Commands::Inspect(inspect_args) => handle_inspect(inspect_args, &args),
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn load_config(args: &CliArgs) -> Result<GradlifyConfig> {
    let mut config = GradlifyConfig::default();
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn handle_migrate(args: &MigrateArgs, global: &CliArgs) -> Result<()> {
    let defaults = load_config(global)?;
    let config = GradlifyConfig {
        mode: args.mode.map(Into::into).unwrap_or(defaults.mode),
        output_format: args
            .format
            .map(Into::into)
            .unwrap_or(defaults.output_format),
        ..defaults
    };

    info!(
        project = %args.project.display(),
        mode = config.mode.as_str(),
        dry_run = args.dry_run,
        "Starting migration"
    );

    let fs = RealFileSystem;
    let mut context = MigrationContext::new(&fs, &args.project, config.mode)
        .with_descriptor(config.descriptor.clone());
    let plan = MigrationOrchestrator::new().execute(&mut context)?;

    let formatter = OutputFormatter::new(config.output_format);

    if args.dry_run {
        println!("{}", formatter.format_dry_run(&plan)?);
        return Ok(());
    }

    let output_dir = args.output.as_deref().unwrap_or(args.project.as_path());
    let written = write_plan(&fs, &plan, output_dir)?;
    println!("{}", formatter.format_written(&plan, &written, output_dir)?);

    Ok(())
}

fn handle_inspect(args: &InspectArgs, global: &CliArgs) -> Result<()> {
    let defaults = load_config(global)?;
    let format = args
        .format
        .map(Into::into)
        .unwrap_or(defaults.output_format);

    info!(project = %args.project.display(), "Inspecting project");

    let tree = discover_modules_named(&RealFileSystem, &args.project, &defaults.descriptor)?;
    let report = ProjectReport::from_tree(&tree);
    println!("{}", OutputFormatter::new(format).format_report(&report)?);

    Ok(())
}
