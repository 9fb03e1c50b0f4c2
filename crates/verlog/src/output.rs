use verlog_core::{ChangeCategory, ChangelogEntry};

/// Horizontal rule between console sections.
pub(crate) fn hr() {
    println!("{}", "-".repeat(60));
}

/// Print one changelog entry for console display.
pub(crate) fn print_entry(version: &str, entry: &ChangelogEntry) {
    println!("Version {version} - {}", entry.release_date);
    if !entry.description.is_empty() {
        println!("Description: {}", entry.description);
    }

    for category in ChangeCategory::ALL {
        let changes = entry.changes(category);
        if changes.is_empty() {
            continue;
        }
        println!();
        println!("{category}:");
        for change in changes {
            println!("  - {change}");
        }
    }
}
