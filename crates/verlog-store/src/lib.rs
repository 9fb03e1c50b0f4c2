mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{APP_VERSION_FILE, CHANGELOG_FILE, PLUGINS_DIR, PLUGIN_VERSION_FILE, VersionStore};
