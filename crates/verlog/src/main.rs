mod commands;
mod error;
mod interaction;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use verlog_core::Target;
use verlog_store::VersionStore;

use crate::commands::{CommandContext, Commands};
use crate::error::CliError;
use crate::interaction::TerminalPrompter;

#[derive(Parser)]
#[command(name = "verlog")]
#[command(version)]
#[command(
    about = "Manage semantic versions and changelogs for an application and its plugins",
    long_about = None
)]
struct Cli {
    /// Project root containing config/ and plugins/ (default: current directory)
    #[arg(long = "root", short = 'C', global = true)]
    root: Option<PathBuf>,

    /// Operate on a named plugin instead of the application
    #[arg(long = "plugin", short = 'p', global = true)]
    plugin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let cli = Cli::parse();

    let root = match resolve_root(cli.root) {
        Ok(root) => root,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = CommandContext {
        store: VersionStore::new(root),
        target: Target::from_plugin(cli.plugin),
        prompter: Box::new(TerminalPrompter),
    };

    if let Err(e) = cli.command.execute(&ctx) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
