use std::fmt;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::version::today;

/// Development status of a versioned target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DevStatus {
    #[default]
    Development,
    Alpha,
    Beta,
    Stable,
}

impl DevStatus {
    pub const ALL: [Self; 4] = [Self::Development, Self::Alpha, Self::Beta, Self::Stable];
}

impl fmt::Display for DevStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Development => "Development",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Stable => "Stable",
        };
        write!(f, "{s}")
    }
}

/// Keep-a-Changelog change category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    #[default]
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

impl ChangeCategory {
    /// Rendering order for changelog sections.
    pub const ALL: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        };
        write!(f, "{s}")
    }
}

/// The unit a version record is scoped to: the application singleton or one
/// named plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Application,
    Plugin(String),
}

impl Target {
    #[must_use]
    pub fn from_plugin(plugin: Option<String>) -> Self {
        match plugin {
            Some(name) => Self::Plugin(name),
            None => Self::Application,
        }
    }

    #[must_use]
    pub fn plugin_name(&self) -> Option<&str> {
        match self {
            Self::Application => None,
            Self::Plugin(name) => Some(name),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "the application"),
            Self::Plugin(name) => write!(f, "plugin '{name}'"),
        }
    }
}

/// One released version's worth of change notes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangelogEntry {
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub changed: Vec<String>,
    #[serde(default)]
    pub deprecated: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
    #[serde(default)]
    pub fixed: Vec<String>,
    #[serde(default)]
    pub security: Vec<String>,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(release_date: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            release_date: release_date.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn changes(&self, category: ChangeCategory) -> &[String] {
        match category {
            ChangeCategory::Added => &self.added,
            ChangeCategory::Changed => &self.changed,
            ChangeCategory::Deprecated => &self.deprecated,
            ChangeCategory::Removed => &self.removed,
            ChangeCategory::Fixed => &self.fixed,
            ChangeCategory::Security => &self.security,
        }
    }

    pub fn changes_mut(&mut self, category: ChangeCategory) -> &mut Vec<String> {
        match category {
            ChangeCategory::Added => &mut self.added,
            ChangeCategory::Changed => &mut self.changed,
            ChangeCategory::Deprecated => &mut self.deprecated,
            ChangeCategory::Removed => &mut self.removed,
            ChangeCategory::Fixed => &mut self.fixed,
            ChangeCategory::Security => &mut self.security,
        }
    }

    /// Total number of change lines across all six categories.
    #[must_use]
    pub fn change_count(&self) -> usize {
        ChangeCategory::ALL
            .iter()
            .map(|c| self.changes(*c).len())
            .sum()
    }
}

/// The full version record persisted per target.
///
/// Every field carries a serde default so that older, structurally
/// incomplete version files back-fill on read instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(default = "default_text")]
    pub product: String,
    #[serde(default)]
    pub major: u64,
    #[serde(default)]
    pub minor: u64,
    #[serde(default)]
    pub patch: u64,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub status: DevStatus,
    #[serde(default = "default_text")]
    pub codename: String,
    #[serde(default = "default_text")]
    pub release_date: String,
    #[serde(default = "default_text")]
    pub copyright: String,
    #[serde(default)]
    pub changelog: IndexMap<String, ChangelogEntry>,
}

fn default_text() -> String {
    "N/A".to_string()
}

impl VersionRecord {
    /// A fresh 1.0.0 record with the standard init defaults.
    #[must_use]
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            major: 1,
            minor: 0,
            patch: 0,
            extra: String::new(),
            status: DevStatus::Development,
            codename: "Phoenix".to_string(),
            release_date: today(),
            copyright: format!("Copyright © {}", chrono::Local::now().format("%Y")),
            changelog: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_init_defaults() {
        let record = VersionRecord::new("Blog");

        assert_eq!(record.product, "Blog");
        assert_eq!((record.major, record.minor, record.patch), (1, 0, 0));
        assert!(record.extra.is_empty());
        assert_eq!(record.status, DevStatus::Development);
        assert_eq!(record.codename, "Phoenix");
        assert!(record.changelog.is_empty());
        assert!(record.copyright.starts_with("Copyright ©"));
    }

    #[test]
    fn change_count_sums_all_categories() {
        let mut entry = ChangelogEntry::new("01/01/2026", "First release");
        entry.added.push("feature".to_string());
        entry.fixed.push("bug".to_string());
        entry.fixed.push("another bug".to_string());
        entry.security.push("hole".to_string());

        assert_eq!(entry.change_count(), 4);
    }

    #[test]
    fn changes_mut_appends_to_the_selected_category() {
        let mut entry = ChangelogEntry::new("01/01/2026", "");

        entry
            .changes_mut(ChangeCategory::Deprecated)
            .push("old API".to_string());

        assert_eq!(entry.changes(ChangeCategory::Deprecated), ["old API"]);
        assert!(entry.changes(ChangeCategory::Added).is_empty());
    }

    #[test]
    fn target_display_names_the_unit() {
        assert_eq!(Target::Application.to_string(), "the application");
        assert_eq!(
            Target::Plugin("Blog".to_string()).to_string(),
            "plugin 'Blog'"
        );
    }

    #[test]
    fn target_from_plugin_option() {
        assert_eq!(Target::from_plugin(None), Target::Application);
        assert_eq!(
            Target::from_plugin(Some("Blog".to_string())),
            Target::Plugin("Blog".to_string())
        );
        assert_eq!(
            Target::Plugin("Blog".to_string()).plugin_name(),
            Some("Blog")
        );
    }
}
