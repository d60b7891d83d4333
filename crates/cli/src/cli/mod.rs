pub mod commands;
pub mod output;

pub use commands::{CliArgs, Commands, InspectArgs, MigrateArgs};
pub use output::OutputFormatter;
