use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("version '{version}' is not present in the changelog")]
    VersionNotFound { version: String },

    #[error("invalid date '{input}': expected DD/MM/YYYY")]
    InvalidDate { input: String },
}

pub type Result<T> = std::result::Result<T, ChangelogError>;
