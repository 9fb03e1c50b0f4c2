use crate::error::{CliError, Result};

use super::{CommandContext, write_changelog};

pub(super) fn run(ctx: &CommandContext) -> Result<()> {
    let record = ctx.load_required()?;

    if record.changelog.is_empty() {
        return Err(CliError::EmptyChangelog(ctx.target.clone()));
    }

    let path = write_changelog(ctx, &ctx.target, &record)?;
    println!("Changelog exported: {}", path.display());

    Ok(())
}
