use verlog_changelog::{ChangelogError, sorted_versions_desc};

use crate::error::{CliError, Result};
use crate::output;

use super::{CommandContext, ViewArgs};

pub(super) fn run(ctx: &CommandContext, args: &ViewArgs) -> Result<()> {
    let record = ctx.load_required()?;

    if record.changelog.is_empty() {
        return Err(CliError::EmptyChangelog(ctx.target.clone()));
    }

    match &args.version {
        Some(version) => {
            let entry = record.changelog.get(version).ok_or_else(|| {
                ChangelogError::VersionNotFound {
                    version: version.clone(),
                }
            })?;

            println!("Changelog of version {version} for {}", ctx.target);
            output::hr();
            output::print_entry(version, entry);
        }
        None => {
            println!("Full changelog for {}", ctx.target);
            output::hr();
            for version in sorted_versions_desc(&record.changelog) {
                if let Some(entry) = record.changelog.get(version) {
                    output::print_entry(version, entry);
                    output::hr();
                }
            }
        }
    }

    Ok(())
}
