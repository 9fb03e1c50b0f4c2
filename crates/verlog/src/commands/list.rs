use verlog_core::Target;

use crate::error::Result;

use super::CommandContext;

pub(super) fn run(ctx: &CommandContext) -> Result<()> {
    let mut initialized = 0u32;
    let mut uninitialized = 0u32;

    println!("Application:");
    match ctx.store.load(&Target::Application) {
        Some(record) => {
            println!("  {}", record.long_version());
            initialized += 1;
        }
        None => {
            println!("  not initialized - run: verlog init");
            uninitialized += 1;
        }
    }

    println!();
    println!("Plugins:");
    let plugins = ctx.store.plugins();
    if plugins.is_empty() {
        println!("  none found");
    }
    for name in plugins {
        match ctx.store.load(&Target::Plugin(name.clone())) {
            Some(record) => {
                println!(
                    "  {name}: {} {} - {}",
                    record.product,
                    record.short_version(),
                    record.status
                );
                initialized += 1;
            }
            None => {
                println!("  {name}: not initialized - run: verlog init -p {name}");
                uninitialized += 1;
            }
        }
    }

    println!();
    println!("Summary: {initialized} initialized, {uninitialized} not initialized");

    Ok(())
}
