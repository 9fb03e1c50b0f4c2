mod bump;
mod changelog;
mod current;
mod export;
mod history;
mod init;
mod init_all;
mod list;
mod set;
mod view;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use verlog_core::{BumpKind, ChangeCategory, Target, VersionRecord};
use verlog_store::VersionStore;

use crate::error::{CliError, Result};
use crate::interaction::Prompter;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the current version of the target
    Current,
    /// Increment the version (major, minor, patch, or extra)
    Bump(BumpArgs),
    /// Set an explicit version
    Set(SetArgs),
    /// Initialize the version system for the target
    Init(InitArgs),
    /// Initialize the application and every plugin with defaults
    InitAll,
    /// List the application and all plugins with their versions
    List,
    /// Add to or edit a version's changelog entry
    Changelog(ChangelogArgs),
    /// Show changelog entries on the console
    View(ViewArgs),
    /// Show the release history
    History,
    /// Write the target's CHANGELOG.md
    Export,
}

#[derive(Args)]
pub(crate) struct BumpArgs {
    /// Kind of increment
    pub kind: BumpKind,

    /// Suffix for 'bump extra' (prompted when omitted)
    #[arg(long)]
    pub extra: Option<String>,

    /// Release description (prompted when omitted)
    #[arg(short = 'm', long)]
    pub message: Option<String>,
}

#[derive(Args)]
pub(crate) struct SetArgs {
    /// Version in the form X.Y.Z[-suffix]
    pub version: String,

    /// Release description (prompted when omitted)
    #[arg(short = 'm', long)]
    pub message: Option<String>,
}

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Accept every default without prompting
    #[arg(long)]
    pub defaults: bool,

    /// Overwrite an existing version file without asking
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub(crate) struct ChangelogArgs {
    /// Version to edit (defaults to the record's current version)
    pub version: Option<String>,

    #[command(subcommand)]
    pub action: Option<ChangelogAction>,
}

#[derive(Subcommand)]
pub(crate) enum ChangelogAction {
    /// Append a change line to a category
    Add {
        /// Change category (prompted when omitted)
        #[arg(short = 'c', long)]
        category: Option<ChangeCategory>,

        /// Change description (prompted when omitted)
        #[arg(short = 't', long)]
        text: Option<String>,
    },
    /// Replace the entry description
    Describe {
        /// New description (prompted when omitted)
        text: Option<String>,
    },
    /// Set the entry release date
    Date {
        /// Release date in the form DD/MM/YYYY
        date: String,
    },
    /// Print the entry
    Show,
}

#[derive(Args)]
pub(crate) struct ViewArgs {
    /// Show only this version's entry
    pub version: Option<String>,
}

pub(crate) struct CommandContext {
    pub store: VersionStore,
    pub target: Target,
    pub prompter: Box<dyn Prompter>,
}

impl CommandContext {
    /// Load the target's record, failing when it is not initialized.
    pub(crate) fn load_required(&self) -> Result<VersionRecord> {
        self.store
            .load(&self.target)
            .ok_or_else(|| CliError::NotInitialized(self.target.clone()))
    }
}

impl Commands {
    pub(crate) fn execute(self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Current => current::run(ctx),
            Self::Bump(args) => bump::run(ctx, &args),
            Self::Set(args) => set::run(ctx, &args),
            Self::Init(args) => init::run(ctx, &args),
            Self::InitAll => init_all::run(ctx),
            Self::List => list::run(ctx),
            Self::Changelog(args) => changelog::run(ctx, args),
            Self::View(args) => view::run(ctx, &args),
            Self::History => history::run(ctx),
            Self::Export => export::run(ctx),
        }
    }
}

/// Render and overwrite `CHANGELOG.md` for a target.
pub(crate) fn write_changelog(
    ctx: &CommandContext,
    target: &Target,
    record: &VersionRecord,
) -> Result<PathBuf> {
    let path = ctx.store.changelog_file(target)?;
    std::fs::write(&path, verlog_changelog::render(record)).map_err(|source| {
        CliError::ChangelogWrite {
            path: path.clone(),
            source,
        }
    })?;
    Ok(path)
}
