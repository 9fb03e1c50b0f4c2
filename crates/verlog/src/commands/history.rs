use verlog_changelog::sorted_versions_desc;

use crate::error::{CliError, Result};
use crate::output;

use super::CommandContext;

pub(super) fn run(ctx: &CommandContext) -> Result<()> {
    let record = ctx.load_required()?;

    if record.changelog.is_empty() {
        return Err(CliError::EmptyChangelog(ctx.target.clone()));
    }

    println!("Version history for {}", ctx.target);
    output::hr();

    for version in sorted_versions_desc(&record.changelog) {
        let Some(entry) = record.changelog.get(version) else {
            continue;
        };
        println!("{version} - {}", entry.release_date);
        println!("    {} change(s) - {}", entry.change_count(), entry.description);
        println!();
    }

    Ok(())
}
