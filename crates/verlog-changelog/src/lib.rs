mod edit;
mod error;
mod format;

pub use edit::{append_change, open_entry, set_description, set_release_date};
pub use error::{ChangelogError, Result};
pub use format::{render, sorted_versions_desc};
