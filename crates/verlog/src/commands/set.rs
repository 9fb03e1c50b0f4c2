use verlog_core::VersionParts;

use crate::error::Result;

use super::{CommandContext, SetArgs};

pub(super) fn run(ctx: &CommandContext, args: &SetArgs) -> Result<()> {
    let parts = VersionParts::parse(&args.version)?;

    let mut record = ctx.load_required()?;
    let old = record.short_version();

    record.set_version(&parts);
    let new = record.short_version();

    let description = match &args.message {
        Some(message) => message.clone(),
        None => ctx
            .prompter
            .input("Release description", Some(&format!("Release {new}")))?,
    };
    verlog_changelog::open_entry(&mut record, &new, &description);

    ctx.store.save(&ctx.target, &record)?;

    println!("Version set: {old} -> {new}");

    Ok(())
}
