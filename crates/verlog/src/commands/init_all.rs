use verlog_core::{Target, VersionRecord};

use crate::error::Result;

use super::{CommandContext, write_changelog};

pub(super) fn run(ctx: &CommandContext) -> Result<()> {
    println!("Initializing version system for the application and all plugins");

    let mut initialized = 0u32;
    let mut skipped = 0u32;

    let mut targets = vec![(Target::Application, "My Application".to_string())];
    for plugin in ctx.store.plugins() {
        targets.push((Target::Plugin(plugin.clone()), plugin));
    }

    for (target, product) in targets {
        if ctx.store.exists(&target) {
            println!("  {target}: already initialized - skipped");
            skipped += 1;
            continue;
        }

        let mut record = VersionRecord::new(product);
        if matches!(target, Target::Plugin(_)) {
            record.codename = "Default".to_string();
        }

        ctx.store.save(&target, &record)?;
        write_changelog(ctx, &target, &record)?;

        println!("  {target}: initialized at {}", record.short_version());
        initialized += 1;
    }

    println!("Initialization complete: {initialized} initialized, {skipped} skipped");

    Ok(())
}
