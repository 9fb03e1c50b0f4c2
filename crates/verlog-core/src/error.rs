use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid version format '{input}': expected X.Y.Z[-suffix]")]
    InvalidVersionFormat { input: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
