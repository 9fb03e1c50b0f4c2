pub mod error;
pub mod types;
pub mod version;

pub use error::{CoreError, Result};
pub use types::{ChangeCategory, ChangelogEntry, DevStatus, Target, VersionRecord};
pub use version::{Bump, BumpKind, DATE_FORMAT, VersionParts, today};
