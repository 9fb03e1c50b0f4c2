use std::path::PathBuf;

use thiserror::Error;

use verlog_core::Target;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("version system is not initialized for {0}; run 'verlog init' first")]
    NotInitialized(Target),

    #[error("version system is already initialized for {0}; use --force to overwrite")]
    AlreadyInitialized(Target),

    #[error("no changelog entries recorded for {0}")]
    EmptyChangelog(Target),

    #[error(transparent)]
    Core(#[from] verlog_core::CoreError),

    #[error("version store error")]
    Store(#[from] verlog_store::StoreError),

    #[error(transparent)]
    Changelog(#[from] verlog_changelog::ChangelogError),

    #[error("failed to write changelog at '{path}'")]
    ChangelogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("prompt failed")]
    Dialog(#[from] dialoguer::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
