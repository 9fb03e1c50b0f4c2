use std::fmt::Write as _;

use indexmap::IndexMap;

use verlog_core::{ChangeCategory, ChangelogEntry, VersionParts, VersionRecord};

const CHANGELOG_INTRO: &str =
    "All notable changes to this project will be documented in this file.";

/// Changelog version keys, newest first.
///
/// Keys that fail to parse (which the tool itself never writes) sort as
/// `0.0.0` with the whole key as suffix, so they end up at the bottom.
#[must_use]
pub fn sorted_versions_desc(changelog: &IndexMap<String, ChangelogEntry>) -> Vec<&str> {
    let mut versions: Vec<&str> = changelog.keys().map(String::as_str).collect();
    versions.sort_by_cached_key(|version| sort_key(version));
    versions.reverse();
    versions
}

fn sort_key(version: &str) -> VersionParts {
    VersionParts::parse(version).unwrap_or_else(|_| VersionParts {
        major: 0,
        minor: 0,
        patch: 0,
        extra: version.to_string(),
    })
}

/// Render the record's changelog as Markdown.
///
/// Sections are ordered newest-version first; an empty changelog yields a
/// single synthetic section for the record's current version.
#[must_use]
pub fn render(record: &VersionRecord) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Changelog - {}", record.product);
    output.push('\n');
    output.push_str(CHANGELOG_INTRO);
    output.push_str("\n\n");

    if record.changelog.is_empty() {
        let _ = writeln!(
            output,
            "## [{}] - {}",
            record.short_version(),
            record.release_date
        );
        output.push('\n');
        output.push_str("**Initial version**\n\n");
        return output;
    }

    for version in sorted_versions_desc(&record.changelog) {
        let Some(entry) = record.changelog.get(version) else {
            continue;
        };
        let _ = writeln!(output, "## [{version}] - {}", entry.release_date);
        output.push('\n');

        if !entry.description.is_empty() {
            let _ = writeln!(output, "**{}**", entry.description);
            output.push('\n');
        }

        for category in ChangeCategory::ALL {
            let changes = entry.changes(category);
            if changes.is_empty() {
                continue;
            }
            let _ = writeln!(output, "### {category}");
            output.push('\n');
            for change in changes {
                let _ = writeln!(output, "- {change}");
            }
            output.push('\n');
        }
    }

    output
}
