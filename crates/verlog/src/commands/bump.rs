use verlog_core::{Bump, BumpKind, Target};

use crate::error::Result;

use super::{BumpArgs, CommandContext};

pub(super) fn run(ctx: &CommandContext, args: &BumpArgs) -> Result<()> {
    let mut record = ctx.load_required()?;
    let old = record.short_version();

    let bump = match args.kind {
        BumpKind::Major => Bump::Major,
        BumpKind::Minor => Bump::Minor,
        BumpKind::Patch => Bump::Patch,
        BumpKind::Extra => {
            let suffix = match &args.extra {
                Some(suffix) => suffix.clone(),
                None => ctx
                    .prompter
                    .input("Extra version (dev, beta, rc1, ...)", None)?,
            };
            Bump::Extra(suffix)
        }
    };

    record.apply_bump(&bump);
    let new = record.short_version();
    println!("Bumping version: {old} -> {new}");

    let description = match &args.message {
        Some(message) => message.clone(),
        None => ctx
            .prompter
            .input("Release description", Some(&format!("Release {new}")))?,
    };
    verlog_changelog::open_entry(&mut record, &new, &description);

    ctx.store.save(&ctx.target, &record)?;

    println!("Version bumped: {old} -> {new}");
    println!("{}", changelog_hint(&ctx.target, &new));

    Ok(())
}

fn changelog_hint(target: &Target, version: &str) -> String {
    match target.plugin_name() {
        Some(name) => {
            format!("Add change details with: verlog changelog {version} add -p {name}")
        }
        None => format!("Add change details with: verlog changelog {version} add"),
    }
}
