use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use verlog_core::{Target, VersionRecord};

use crate::error::{Result, StoreError};

/// Application version file, relative to the project root.
pub const APP_VERSION_FILE: &str = "config/version.toml";

/// Version file inside a plugin directory.
pub const PLUGIN_VERSION_FILE: &str = "config/version.toml";

/// Directory containing plugins, relative to the project root.
pub const PLUGINS_DIR: &str = "plugins";

/// Rendered changelog file name.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// On-disk shape of the application version file: the record lives under
/// an `application` key. Plugin files store the record at the top level.
/// The asymmetry is part of the established file layout.
#[derive(Serialize, Deserialize)]
struct ApplicationFile {
    application: VersionRecord,
}

/// Loads and saves per-target version records under a project root.
#[derive(Debug, Clone)]
pub struct VersionStore {
    root: PathBuf,
}

impl VersionStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the version file for a target.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PluginOutsideRoot` if a plugin name escapes
    /// the plugins directory.
    pub fn version_file(&self, target: &Target) -> Result<PathBuf> {
        match target {
            Target::Application => Ok(self.root.join(APP_VERSION_FILE)),
            Target::Plugin(name) => Ok(self.plugin_dir(name)?.join(PLUGIN_VERSION_FILE)),
        }
    }

    /// Path of the rendered `CHANGELOG.md` for a target.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PluginOutsideRoot` if a plugin name escapes
    /// the plugins directory.
    pub fn changelog_file(&self, target: &Target) -> Result<PathBuf> {
        match target {
            Target::Application => Ok(self.root.join(CHANGELOG_FILE)),
            Target::Plugin(name) => Ok(self.plugin_dir(name)?.join(CHANGELOG_FILE)),
        }
    }

    /// Whether the target already has a version file.
    #[must_use]
    pub fn exists(&self, target: &Target) -> bool {
        self.version_file(target)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Load the record for a target.
    ///
    /// Missing files, malformed files, and unsafe plugin paths all read
    /// as "not initialized". Structurally valid files with missing keys
    /// back-fill defaults through serde.
    #[must_use]
    pub fn load(&self, target: &Target) -> Option<VersionRecord> {
        let path = self.version_file(target).ok()?;
        let text = fs::read_to_string(&path).ok()?;

        let parsed = match target {
            Target::Application => {
                toml::from_str::<ApplicationFile>(&text).map(|file| file.application)
            }
            Target::Plugin(_) => toml::from_str::<VersionRecord>(&text),
        };

        match parsed {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring malformed version file");
                None
            }
        }
    }

    /// Save the record for a target, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error for unsafe plugin names or when the file cannot
    /// be serialized or written.
    pub fn save(&self, target: &Target, record: &VersionRecord) -> Result<()> {
        let path = self.version_file(target)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = match target {
            Target::Application => toml::to_string_pretty(&ApplicationFile {
                application: record.clone(),
            }),
            Target::Plugin(_) => toml::to_string_pretty(record),
        }
        .map_err(|source| StoreError::Serialize {
            path: path.clone(),
            source,
        })?;

        fs::write(&path, text).map_err(|source| StoreError::Write { path, source })
    }

    /// Names of plugin directories under the plugins root, sorted.
    #[must_use]
    pub fn plugins(&self) -> Vec<String> {
        let plugins_root = self.root.join(PLUGINS_DIR);
        let entries = match fs::read_dir(&plugins_root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    /// Resolve a plugin directory, refusing names that would escape the
    /// plugins root (separators, `..`, absolute paths).
    fn plugin_dir(&self, name: &str) -> Result<PathBuf> {
        let outside = || StoreError::PluginOutsideRoot {
            name: name.to_string(),
        };

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(first)), None) if first == name => {}
            _ => return Err(outside()),
        }

        let plugins_root = self.root.join(PLUGINS_DIR);
        let dir = plugins_root.join(name);
        if !dir.starts_with(&plugins_root) {
            return Err(outside());
        }
        Ok(dir)
    }
}
